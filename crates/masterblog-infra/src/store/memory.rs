//! In-memory post store - the process-wide record collection.
//!
//! Mutations take the write lock and are serialized with respect to each
//! other and to snapshot reads; `list_all` takes the read lock and clones.
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use masterblog_core::domain::Post;
use masterblog_core::error::DomainError;
use masterblog_core::ports::{PostDraft, PostPatch, PostStore};

/// In-memory post store using a Vec with async RwLock.
///
/// Each instance owns its collection outright, so tests construct isolated
/// stores instead of sharing process globals.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// A store pre-loaded with the given posts.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// The store the server boots with: the fixed seed set, ids 1 through 5.
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Next id is max existing id + 1; an empty collection restarts at 1.
fn next_id(posts: &[Post]) -> u64 {
    posts.iter().map(|post| post.id).max().unwrap_or(0) + 1
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list_all(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        // Validate before taking the write lock; a rejected draft must not
        // touch the collection at all.
        let new_post = draft.validate()?;

        let mut posts = self.posts.write().await;
        let post = Post {
            id: next_id(&posts),
            title: new_post.title,
            content: new_post.content,
            author: new_post.author,
            date: new_post.date,
        };
        posts.push(post.clone());

        tracing::debug!(id = post.id, "Post created");
        Ok(post)
    }

    async fn update(&self, id: u64, patch: PostPatch) -> Result<Post, DomainError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(DomainError::NotFound(id))?;

        patch.apply(post)?;

        tracing::debug!(id, "Post updated");
        Ok(post.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), DomainError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|post| post.id == id)
            .ok_or(DomainError::NotFound(id))?;
        posts.remove(index);

        tracing::debug!(id, "Post deleted");
        Ok(())
    }
}

/// The fixed seed set served since the first deployment.
pub fn seed_posts() -> Vec<Post> {
    fn post(id: u64, title: &str, content: &str, author: &str, day: u32) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
            date: NaiveDate::from_ymd_opt(2023, 6, day).expect("seed dates are valid"),
        }
    }

    vec![
        post(1, "First Post", "This is the first post.", "John Doe", 7),
        post(2, "Second Post", "This is the second post.", "Jane Smith", 8),
        post(
            3,
            "Third Post",
            "Another interesting post content.",
            "John Doe",
            9,
        ),
        post(
            4,
            "Fourth Post",
            "Yet another piece of content for a blog.",
            "Alice Brown",
            10,
        ),
        post(
            5,
            "Fifth Post",
            "Concluding thoughts on a topic.",
            "Jane Smith",
            11,
        ),
    ]
}
