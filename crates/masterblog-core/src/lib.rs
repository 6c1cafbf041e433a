//! # Masterblog Core
//!
//! The domain layer of the Masterblog API: the post entity, the validation
//! and error taxonomy, the store port, and the read-only query engine that
//! sorts and searches snapshots of the collection. No infrastructure
//! dependency lives here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod query;

pub use error::DomainError;
