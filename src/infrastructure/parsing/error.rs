//! Error types for HTML parsing operations.

use thiserror::Error;

pub type ParsingResult<T> = Result<T, ParsingError>;

#[derive(Debug, Clone, Error)]
pub enum ParsingError {
    /// A selector string failed to compile. This is a structural fault and
    /// is never swallowed; matching zero elements is not an error.
    #[error("invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("failed to resolve link '{href}' against {base}: {reason}")]
    UrlResolution {
        href: String,
        base: String,
        reason: String,
    },
}

impl ParsingError {
    pub fn invalid_selector(selector: &str, reason: impl ToString) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn url_resolution(href: &str, base: &str, reason: impl ToString) -> Self {
        Self::UrlResolution {
            href: href.to_string(),
            base: base.to_string(),
            reason: reason.to_string(),
        }
    }
}
