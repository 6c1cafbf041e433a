//! Domain entities.

mod post;

pub use post::{DATE_FORMAT, Post, parse_date};
