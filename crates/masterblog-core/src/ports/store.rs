use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{Post, parse_date};
use crate::error::DomainError;

/// Creation input as it arrives off the wire.
///
/// Every field is optional so that validation can name all missing fields in
/// a single error instead of stopping at the first one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

/// A draft that passed validation: all four fields present, date parsed.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
}

impl PostDraft {
    /// Validate the four required fields.
    ///
    /// Absent and empty are the same failure. Field presence is checked
    /// first and reported in one error; the date format is only checked once
    /// all fields are there.
    pub fn validate(self) -> Result<NewPost, DomainError> {
        fn required(
            value: Option<String>,
            name: &'static str,
            missing: &mut Vec<&'static str>,
        ) -> String {
            match value {
                Some(value) if !value.is_empty() => value,
                _ => {
                    missing.push(name);
                    String::new()
                }
            }
        }

        let mut missing = Vec::new();
        let title = required(self.title, "title", &mut missing);
        let content = required(self.content, "content", &mut missing);
        let author = required(self.author, "author", &mut missing);
        let date = required(self.date, "date", &mut missing);

        if !missing.is_empty() {
            return Err(DomainError::Validation(format!(
                "Missing required fields: {}.",
                missing.join(", ")
            )));
        }

        let date = parse_date(&date)?;

        Ok(NewPost {
            title,
            content,
            author,
            date,
        })
    }
}

/// Partial update input: one absent-capable slot per mutable field.
///
/// Only supplied fields are applied; an omitted field is left exactly as it
/// was. Supplied values overwrite, including empty strings - non-emptiness
/// is a creation-time rule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl PostPatch {
    /// Apply the patch to `post`.
    ///
    /// A supplied date is parsed up front, so a format error leaves the post
    /// completely unmodified - no field is touched before every supplied
    /// value is known to be valid.
    pub fn apply(self, post: &mut Post) -> Result<(), DomainError> {
        let date = self.date.as_deref().map(parse_date).transpose()?;

        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(date) = date {
            post.date = date;
        }

        Ok(())
    }
}

/// The record store port - exclusive owner of the live post collection and
/// of id allocation.
///
/// Reads hand out snapshot copies; callers sort or filter those snapshots
/// and never observe a reordered live collection. Implementations serialize
/// mutations with respect to each other and to snapshot reads.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Snapshot of the current posts in insertion order.
    async fn list_all(&self) -> Vec<Post>;

    /// Validate a draft, allocate the next id, append and return the post.
    async fn create(&self, draft: PostDraft) -> Result<Post, DomainError>;

    /// Apply a partial update to the post with `id` and return it.
    async fn update(&self, id: u64, patch: PostPatch) -> Result<Post, DomainError>;

    /// Remove the post with `id`.
    async fn delete(&self, id: u64) -> Result<(), DomainError>;
}
