use std::fmt;

/// The kind of list element that failed validation inside a game record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Version,
    Video,
    Expansion,
    ExpandedGame,
    Comment,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Video => "video",
            Self::Expansion => "expansion",
            Self::ExpandedGame => "expanded game",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while building objects from decoded response records.
///
/// Only required data produces these. Optional fields that are missing or
/// malformed resolve to `None` instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidRecordError {
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("invalid value for `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("{what} is not a mapping")]
    NotAMapping { what: &'static str },

    #[error("invalid {kind} data: {source}")]
    InvalidEntry {
        kind: EntryKind,
        #[source]
        source: Box<InvalidRecordError>,
    },
}

impl InvalidRecordError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub fn not_a_mapping(what: &'static str) -> Self {
        Self::NotAMapping { what }
    }

    /// Tag an element-level failure with the list it came from.
    pub fn entry(kind: EntryKind, source: InvalidRecordError) -> Self {
        Self::InvalidEntry {
            kind,
            source: Box::new(source),
        }
    }
}
