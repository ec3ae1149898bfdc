//! Service layer for asides
//!
//! Centralizes business logic between HTTP handlers and storage.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod aside_service;
mod auth;
mod error;
mod feed;
mod xml;

pub use aside_service::AsideService;
pub use auth::{AuthError, AuthGate, Authorized};
pub use error::ServiceError;
pub use feed::{last_modified, render_atom, Feed};
pub use xml::{escape_xml, render_aside_xml};
