//! # Masterblog Infrastructure
//!
//! Concrete implementations of the ports defined in `masterblog-core`.
//! The only storage backend is the in-memory one: state lives for the
//! process lifetime and is lost on restart, which is the deployment model
//! of this service.

pub mod store;

pub use store::{InMemoryPostStore, seed_posts};
