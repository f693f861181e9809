use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::describe::{self, Describe};
use crate::error::InvalidRecordError;
use crate::normalize::{Lenient, parse_post_date};
use crate::record::{Record, raw_text};
use crate::thing::{Identified, Thing, ThingId};

/// A video linked from a game page (review, how-to-play, session...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Video {
    #[serde(flatten)]
    thing: Thing,
    category: Option<String>,
    link: Option<String>,
    language: Option<String>,
    uploader: Option<String>,
    uploader_id: i64,
    post_date: Option<NaiveDateTime>,
    #[serde(skip)]
    post_date_parse: Lenient<NaiveDateTime>,
}

impl Video {
    pub fn from_value(value: &Value) -> Result<Self, InvalidRecordError> {
        Self::from_record(&Record::new(value, "video")?)
    }

    /// Build from a decoded record. `id` and `uploader_id` are required;
    /// an unparsable `post_date` is dropped with a warning.
    pub fn from_record(record: &Record<'_>) -> Result<Self, InvalidRecordError> {
        let thing = Thing::from_record(record)?;
        let uploader_id = record.require_int("uploader_id")?;

        let post_date_parse = match record.get("post_date") {
            None => Lenient::Absent,
            Some(Value::String(raw)) => match parse_post_date(raw) {
                Some(date) => Lenient::Parsed(date),
                None => Lenient::Malformed(raw.clone()),
            },
            Some(other) => Lenient::Malformed(raw_text(other)),
        };
        if let Lenient::Malformed(raw) = &post_date_parse {
            log::warn!("Video {}: unparsable post date {raw:?}", thing.id());
        }

        Ok(Self {
            thing,
            category: record.opt_str("category"),
            link: record.opt_str("link"),
            language: record.opt_str("language"),
            uploader: record.opt_str("uploader"),
            uploader_id,
            post_date: post_date_parse.clone().value(),
            post_date_parse,
        })
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Display name of the user who posted the video.
    pub fn uploader(&self) -> Option<&str> {
        self.uploader.as_deref()
    }

    pub fn uploader_id(&self) -> i64 {
        self.uploader_id
    }

    pub fn post_date(&self) -> Option<NaiveDateTime> {
        self.post_date
    }

    /// How `post_date` was resolved. Lets callers tell a missing date from
    /// one that was present but unparsable.
    pub fn post_date_parse(&self) -> &Lenient<NaiveDateTime> {
        &self.post_date_parse
    }
}

impl Identified for Video {
    fn id(&self) -> ThingId {
        self.thing.id()
    }

    fn name(&self) -> Option<&str> {
        self.thing.name()
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardGameVideo (link: {})", self.link().unwrap_or("-"))
    }
}

impl Describe for Video {
    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        describe::field(out, "video id", self.id())?;
        describe::opt_field(out, "video title", self.name())?;
        describe::opt_field(out, "video category", self.category())?;
        describe::opt_field(out, "video link", self.link())?;
        describe::opt_field(out, "video language", self.language())?;
        describe::opt_field(out, "video uploader", self.uploader())?;
        describe::field(out, "video uploader id", self.uploader_id)?;
        describe::opt_field(out, "video posted at", self.post_date)
    }
}
