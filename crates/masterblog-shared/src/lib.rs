//! # Masterblog Shared
//!
//! Wire types shared between the API server and the separate front end.

pub mod response;

pub use response::{ErrorBody, MessageBody};
