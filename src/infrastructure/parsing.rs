//! Selector-driven HTML parsing for listing and detail pages.

pub mod config;
pub mod detail;
pub mod error;
pub mod extract;
pub mod listing;

pub use config::SelectorConfig;
pub use detail::JobDetailParser;
pub use error::{ParsingError, ParsingResult};
pub use extract::{compile_selector, extract_text};
pub use listing::ListingPageParser;
