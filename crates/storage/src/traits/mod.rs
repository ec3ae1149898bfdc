//! Storage backend trait abstraction
//!
//! Async domain traits for storage operations, so the service layer never
//! depends on a concrete database.

pub mod aside;

pub use aside::AsideStore;
