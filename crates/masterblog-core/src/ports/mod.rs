//! Ports - the trait seam the infrastructure crate implements.

mod store;

pub use store::{NewPost, PostDraft, PostPatch, PostStore};
