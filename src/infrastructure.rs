//! Infrastructure layer: HTTP, parsing, permissions, export, config, logging.

pub mod config;
pub mod export;
pub mod http_client;
pub mod logging;
pub mod parsing;
pub mod robots;

pub use config::AppConfig;
pub use http_client::{FetchError, HttpClient, HttpClientConfig};
pub use parsing::{JobDetailParser, ListingPageParser, SelectorConfig};
