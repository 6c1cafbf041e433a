use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Wire format for post dates, inbound and outbound.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Post entity - a single blog post.
///
/// The `id` is assigned by the store on creation and immutable afterwards.
/// The `date` is a calendar date with no time component; on the wire it is
/// always the `YYYY-MM-DD` string, which is exactly how `NaiveDate`
/// serializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
}

impl Post {
    /// The stored date formatted as `YYYY-MM-DD`, as it appears on the wire.
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| DomainError::Validation("Invalid 'date' format. Use YYYY-MM-DD.".to_string()))
}
