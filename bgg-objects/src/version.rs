use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::describe::{self, Describe};
use crate::error::InvalidRecordError;
use crate::normalize::{Lenient, fix_url};
use crate::record::Record;
use crate::thing::{Identified, Thing, ThingId};

/// A published edition of a game (language, publisher, box dimensions...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Version {
    #[serde(flatten)]
    thing: Thing,
    language: Option<String>,
    publisher: Option<String>,
    artist: Option<String>,
    product_code: Option<String>,
    width: Option<f64>,
    length: Option<f64>,
    depth: Option<f64>,
    weight: Option<f64>,
    year: Option<i64>,
    thumbnail: Option<String>,
    image: Option<String>,
}

impl Version {
    pub fn from_value(value: &Value) -> Result<Self, InvalidRecordError> {
        Self::from_record(&Record::new(value, "version")?)
    }

    pub fn from_record(record: &Record<'_>) -> Result<Self, InvalidRecordError> {
        let year = record.lenient_signed("yearpublished");
        if let Lenient::Malformed(raw) = &year {
            log::warn!("Ignoring unusable version year {raw:?}");
        }

        Ok(Self {
            thing: Thing::from_record(record)?,
            language: record.opt_str("language"),
            publisher: record.opt_str("publisher"),
            artist: record.opt_str("artist"),
            product_code: record.opt_str("product_code"),
            width: record.opt_float("width"),
            length: record.opt_float("length"),
            depth: record.opt_float("depth"),
            weight: record.opt_float("weight"),
            year: year.value(),
            thumbnail: record.opt_str("thumbnail").and_then(|u| fix_url(&u)),
            image: record.opt_str("image").and_then(|u| fix_url(&u)),
        })
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn product_code(&self) -> Option<&str> {
        self.product_code.as_deref()
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn length(&self) -> Option<f64> {
        self.length
    }

    pub fn depth(&self) -> Option<f64> {
        self.depth
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Year this version was published.
    pub fn year(&self) -> Option<i64> {
        self.year
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl Identified for Version {
    fn id(&self) -> ThingId {
        self.thing.id()
    }

    fn name(&self) -> Option<&str> {
        self.thing.name()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardGameVersion (id: {})", self.id())
    }
}

fn dimension(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl Describe for Version {
    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        describe::field(out, "version id", self.id())?;
        describe::opt_field(out, "version name", self.name())?;
        describe::opt_field(out, "version language", self.language())?;
        describe::opt_field(out, "version publisher", self.publisher())?;
        describe::opt_field(out, "version artist", self.artist())?;
        describe::opt_field(out, "version product code", self.product_code())?;
        describe::field(
            out,
            "W x L x D",
            format!(
                "{} x {} x {}",
                dimension(self.width),
                dimension(self.length),
                dimension(self.depth)
            ),
        )?;
        describe::opt_field(out, "weight", self.weight)?;
        describe::opt_field(out, "year", self.year)
    }
}
