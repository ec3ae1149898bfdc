//! Core types for asides
//!
//! Domain types, constants and small formatting helpers shared across all
//! other crates.

mod aside;
mod constants;
mod credentials;
mod env_config;
mod site_urls;
mod time_format;

pub use aside::Aside;
pub use constants::*;
pub use credentials::Credentials;
pub use env_config::{env_parse_with_default, parse_with_default};
pub use site_urls::SiteUrls;
pub use time_format::{http_date, parse_http_date, rfc3339_seconds};
