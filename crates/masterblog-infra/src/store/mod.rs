//! Post store adapters.

mod memory;

pub use memory::{InMemoryPostStore, seed_posts};
