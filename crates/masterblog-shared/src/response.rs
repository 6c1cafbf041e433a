//! Structured response bodies for the HTTP boundary.
//!
//! Failed requests always answer with `{"error": "<message>"}` and the few
//! operations without a record to return answer `{"message": "..."}`. The
//! front end relies on exactly these two shapes.

use serde::{Deserialize, Serialize};

/// Error payload for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Confirmation payload for operations with nothing else to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
