use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::describe::{self, Describe};
use crate::error::InvalidRecordError;
use crate::record::Record;

/// Identifier assigned by the service to games, versions, videos, etc.
pub type ThingId = i64;

/// An entity with a service-assigned id and a display name.
pub trait Identified {
    fn id(&self) -> ThingId;
    fn name(&self) -> Option<&str>;
}

/// The minimal identified entity: an id and an optional name.
///
/// Used directly for cross-references between games (expansions and the
/// games an expansion expands).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thing {
    id: ThingId,
    name: Option<String>,
}

impl Thing {
    pub fn new(id: ThingId, name: Option<String>) -> Self {
        Self { id, name }
    }

    /// Build from a decoded record. `id` is required and must be an integer;
    /// a missing `name` is allowed.
    pub fn from_value(value: &Value) -> Result<Self, InvalidRecordError> {
        Self::from_record(&Record::new(value, "thing")?)
    }

    pub fn from_record(record: &Record<'_>) -> Result<Self, InvalidRecordError> {
        Ok(Self {
            id: record.require_int("id")?,
            name: record.opt_str("name"),
        })
    }
}

impl Identified for Thing {
    fn id(&self) -> ThingId {
        self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for Thing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({})", self.id),
            None => write!(f, "({})", self.id),
        }
    }
}

impl Describe for Thing {
    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        describe::field(out, "id", self.id)?;
        describe::opt_field(out, "name", self.name.as_deref())
    }
}
