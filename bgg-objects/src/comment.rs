use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::describe::Describe;
use crate::error::InvalidRecordError;
use crate::record::Record;

/// Rating text the service uses for comments without a score.
pub const UNRATED: &str = "n/a";

/// A user comment on a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub commenter: String,
    pub comment: String,
    /// The user's rating as sent by the service, or [`UNRATED`].
    pub rating: String,
}

impl Comment {
    pub fn from_value(value: &Value) -> Result<Self, InvalidRecordError> {
        Self::from_record(&Record::new(value, "comment")?)
    }

    /// Build from a decoded record. `username`, `comment` and `rating` are
    /// all required.
    pub fn from_record(record: &Record<'_>) -> Result<Self, InvalidRecordError> {
        Ok(Self {
            commenter: record.require_str("username")?,
            comment: record.require_str("comment")?,
            rating: record.require_str("rating")?,
        })
    }

    pub fn is_rated(&self) -> bool {
        self.rating_value().is_some()
    }

    /// Numeric rating, or `None` for an unrated comment.
    pub fn rating_value(&self) -> Option<f64> {
        if self.rating.trim().eq_ignore_ascii_case(UNRATED) {
            return None;
        }
        self.rating.trim().parse().ok()
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardGameComment(user: {}): {}", self.commenter, self.comment)
    }
}

impl Describe for Comment {
    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(
            out,
            "comment by {} (rating: {}): {}",
            self.commenter, self.rating, self.comment
        )
    }
}
