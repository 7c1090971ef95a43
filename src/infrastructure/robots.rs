//! Crawl-permission pre-check against the site's robots.txt.
//!
//! The policy is consulted once before a run starts. Per-request rechecking
//! is deliberately out of scope: the crawl touches a single listing section
//! and its detail pages, all under the same path prefix.

use std::collections::HashMap;

use tracing::{info, warn};

use super::http_client::HttpClient;

/// Rules for one `User-agent` group.
#[derive(Debug, Clone, Default)]
struct AgentRules {
    disallow: Vec<String>,
    allow: Vec<String>,
}

/// Parsed robots.txt rules.
#[derive(Debug, Clone, Default)]
pub struct RobotsTxt {
    /// Rules per user-agent token (lowercase)
    rules: HashMap<String, AgentRules>,
    /// Rules for `User-agent: *`
    default_rules: AgentRules,
}

impl RobotsTxt {
    /// Parse robots.txt content. Unknown directives are ignored.
    pub fn parse(content: &str) -> Self {
        let mut robots = Self::default();
        let mut current_agents: Vec<String> = Vec::new();
        let mut current_rules = AgentRules::default();
        let mut in_group_body = false;

        let mut flush = |agents: &mut Vec<String>, rules: &mut AgentRules, robots: &mut Self| {
            for agent in agents.drain(..) {
                if agent == "*" {
                    robots.default_rules = rules.clone();
                } else {
                    robots.rules.insert(agent, rules.clone());
                }
            }
            *rules = AgentRules::default();
        };

        for line in content.lines() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            let Some((directive, value)) = line.split_once(':') else {
                continue;
            };
            let directive = directive.trim().to_ascii_lowercase();
            let value = value.trim();

            match directive.as_str() {
                "user-agent" => {
                    // A user-agent line after rule lines starts a new group.
                    if in_group_body {
                        flush(&mut current_agents, &mut current_rules, &mut robots);
                        in_group_body = false;
                    }
                    current_agents.push(value.to_ascii_lowercase());
                }
                "disallow" => {
                    in_group_body = true;
                    if !value.is_empty() {
                        current_rules.disallow.push(value.to_string());
                    }
                }
                "allow" => {
                    in_group_body = true;
                    if !value.is_empty() {
                        current_rules.allow.push(value.to_string());
                    }
                }
                _ => {}
            }
        }

        flush(&mut current_agents, &mut current_rules, &mut robots);
        robots
    }

    /// Whether `path` may be crawled by `user_agent`.
    ///
    /// Longest matching prefix wins; on equal length `Allow` beats
    /// `Disallow`. No matching rule means allowed.
    pub fn is_allowed(&self, user_agent: &str, path: &str) -> bool {
        let agent = user_agent.to_ascii_lowercase();
        let rules = self
            .rules
            .iter()
            .find(|(token, _)| agent.contains(token.as_str()))
            .map(|(_, rules)| rules)
            .unwrap_or(&self.default_rules);

        let longest_match = |patterns: &[String]| {
            patterns
                .iter()
                .filter(|p| path.starts_with(p.as_str()))
                .map(|p| p.len())
                .max()
        };

        let disallowed = longest_match(&rules.disallow);
        let allowed = longest_match(&rules.allow);

        match (disallowed, allowed) {
            (Some(d), Some(a)) => a >= d,
            (Some(_), None) => false,
            _ => true,
        }
    }
}

/// Fetch the origin's robots.txt and decide whether `path` may be crawled.
///
/// An unreachable or missing robots.txt permits the run; only an explicit
/// disallow refuses it.
pub async fn permits_crawl(client: &HttpClient, origin: &str, path: &str) -> bool {
    let robots_url = format!("{}/robots.txt", origin.trim_end_matches('/'));

    match client.fetch_html_string(&robots_url).await {
        Ok(body) => {
            let robots = RobotsTxt::parse(&body);
            let allowed = robots.is_allowed(client.user_agent(), path);
            if allowed {
                info!("robots.txt permits crawling {}", path);
            } else {
                warn!("robots.txt disallows {} for {}", path, client.user_agent());
            }
            allowed
        }
        Err(e) => {
            info!("no usable robots.txt at {} ({}); proceeding", robots_url, e);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# classifieds robots policy
User-agent: *
Disallow: /admin/
Disallow: /search
Allow: /search/jobs

User-agent: badbot
Disallow: /
";

    #[test]
    fn default_group_applies_to_unknown_agents() {
        let robots = RobotsTxt::parse(SAMPLE);
        assert!(robots.is_allowed("jobcrawl/0.2.0", "/jobs?page=1"));
        assert!(!robots.is_allowed("jobcrawl/0.2.0", "/admin/users"));
    }

    #[test]
    fn allow_overrides_shorter_disallow() {
        let robots = RobotsTxt::parse(SAMPLE);
        assert!(!robots.is_allowed("jobcrawl/0.2.0", "/search?q=x"));
        assert!(robots.is_allowed("jobcrawl/0.2.0", "/search/jobs?page=2"));
    }

    #[test]
    fn named_agent_group_wins_over_default() {
        let robots = RobotsTxt::parse(SAMPLE);
        assert!(!robots.is_allowed("BadBot/1.0", "/jobs"));
    }

    #[test]
    fn empty_robots_allows_everything() {
        let robots = RobotsTxt::parse("");
        assert!(robots.is_allowed("anything", "/whatever"));
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let robots = RobotsTxt::parse("# nothing but comments\n\n  \n# still nothing\n");
        assert!(robots.is_allowed("jobcrawl", "/jobs"));
    }
}
