//! HTTP client for the asides API, shared by the CLI and the fetch script.

mod client;
mod error;
#[cfg(test)]
mod tests;

pub use client::{AsideClient, format_aside};
pub use error::ClientError;
