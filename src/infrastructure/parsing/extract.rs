//! Element-level text extraction.

use scraper::{Html, Selector};

use super::{ParsingError, ParsingResult};

/// Compile a selector string, reporting a structural fault on failure.
pub fn compile_selector(selector_str: &str) -> ParsingResult<Selector> {
    Selector::parse(selector_str)
        .map_err(|e| ParsingError::invalid_selector(selector_str, e))
}

/// Extract the text of all elements matching `selector`, in document order.
///
/// The matched elements' text is concatenated (the HTML parser has already
/// decoded entities), then every whitespace run is collapsed to a single
/// space and the result is trimmed.
///
/// Returns `None` when no element matched. A match whose text is empty
/// yields `Some("")`; downstream both render as an empty cell, mirroring
/// the distinction-free handling of the site's sparse detail pages.
pub fn extract_text(html: &Html, selector: &Selector) -> Option<String> {
    let mut matched = false;
    let mut joined = String::new();

    for element in html.select(selector) {
        matched = true;
        for piece in element.text() {
            joined.push_str(piece);
            joined.push(' ');
        }
    }

    if !matched {
        return None;
    }

    Some(collapse_whitespace(&joined))
}

/// Collapse whitespace runs to single spaces and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn zero_matches_is_absence() {
        let html = doc("<p>hello</p>");
        let selector = compile_selector("div.missing").unwrap();
        assert_eq!(extract_text(&html, &selector), None);
    }

    #[test]
    fn matched_but_empty_is_empty_string() {
        let html = doc("<div class=\"blank\"></div>");
        let selector = compile_selector("div.blank").unwrap();
        assert_eq!(extract_text(&html, &selector), Some(String::new()));
    }

    #[test]
    fn joins_all_matches_in_document_order() {
        let html = doc("<p class=\"x\">first</p><span>skip</span><p class=\"x\">second</p>");
        let selector = compile_selector("p.x").unwrap();
        assert_eq!(
            extract_text(&html, &selector),
            Some("first second".to_string())
        );
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        let html = doc("<div class=\"d\">  Night\n\t shift   cleaner </div>");
        let selector = compile_selector("div.d").unwrap();
        assert_eq!(
            extract_text(&html, &selector),
            Some("Night shift cleaner".to_string())
        );
    }

    #[test]
    fn decodes_markup_entities() {
        let html = doc("<div class=\"d\">Sales &amp; Marketing</div>");
        let selector = compile_selector("div.d").unwrap();
        assert_eq!(
            extract_text(&html, &selector),
            Some("Sales & Marketing".to_string())
        );
    }

    #[test]
    fn nested_elements_contribute_text() {
        let html = doc("<div class=\"d\">Driver <b>(heavy</b> goods)</div>");
        let selector = compile_selector("div.d").unwrap();
        assert_eq!(
            extract_text(&html, &selector),
            Some("Driver (heavy goods)".to_string())
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let html = doc("<p class=\"x\">stable  text</p>");
        let selector = compile_selector("p.x").unwrap();
        let first = extract_text(&html, &selector);
        let second = extract_text(&html, &selector);
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_selector_is_a_hard_error() {
        assert!(compile_selector("p..[").is_err());
    }
}
