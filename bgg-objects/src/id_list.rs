//! Ordered collections that keep only the first entry seen for each id.

use std::collections::HashSet;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{EntryKind, InvalidRecordError};
use crate::record::Record;
use crate::thing::{Identified, ThingId};

/// An append-only list of identified entries, unique by id.
///
/// Later entries with an id that is already present are dropped; they never
/// replace or merge into the first one.
#[derive(Debug, Clone)]
pub struct IdList<T> {
    items: Vec<T>,
    seen: HashSet<ThingId>,
}

impl<T> Default for IdList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl<T: Identified> IdList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` unless its id is already present. Returns whether it was
    /// appended.
    pub fn insert(&mut self, item: T) -> bool {
        if !self.seen.insert(item.id()) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Append an entry built from a raw record.
    ///
    /// The record's `id` is checked first: a duplicate is skipped without
    /// building anything. Any failure (missing id, or an error from `build`)
    /// is tagged with `kind`.
    pub fn insert_record(
        &mut self,
        raw: &Value,
        kind: EntryKind,
        build: impl FnOnce(&Record<'_>) -> Result<T, InvalidRecordError>,
    ) -> Result<bool, InvalidRecordError> {
        let tag = |e| InvalidRecordError::entry(kind, e);
        let record = Record::new(raw, kind.as_str()).map_err(tag)?;
        let id = record.require_int("id").map_err(tag)?;
        if self.seen.contains(&id) {
            log::debug!("Dropping duplicate {kind} with id {id}");
            return Ok(false);
        }
        let item = build(&record).map_err(tag)?;
        Ok(self.insert(item))
    }

    /// Build a list from a sequence of raw records, in order.
    pub fn from_records(
        raw: &[Value],
        kind: EntryKind,
        build: impl Fn(&Record<'_>) -> Result<T, InvalidRecordError>,
    ) -> Result<Self, InvalidRecordError> {
        let mut list = Self::new();
        for entry in raw {
            list.insert_record(entry, kind, &build)?;
        }
        Ok(list)
    }

    pub fn contains_id(&self, id: ThingId) -> bool {
        self.seen.contains(&id)
    }

    pub fn get(&self, id: ThingId) -> Option<&T> {
        if !self.contains_id(id) {
            return None;
        }
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ThingId> + '_ {
        self.items.iter().map(Identified::id)
    }
}

impl<T> IdList<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }
}

impl<'a, T> IntoIterator for &'a IdList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for IdList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

#[cfg(test)]
#[path = "tests/id_list_tests.rs"]
mod tests;
