//! Games as they appear in a user's collection listing.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::describe::{self, Describe};
use crate::error::InvalidRecordError;
use crate::game::{BaseGame, Game};
use crate::record::Record;
use crate::thing::{Identified, ThingId};
use crate::version::Version;

/// A game from a user's collection.
///
/// Carries less game data than a [`crate::BoardGame`] but adds the user's own
/// status for the game: plays, rating and ownership flags.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionBoardGame {
    #[serde(flatten)]
    base: BaseGame,
    num_plays: i64,
    last_modified: Option<String>,
    rating: Option<f64>,
    owned: bool,
    preordered: bool,
    prev_owned: bool,
    want: bool,
    want_to_buy: bool,
    want_to_play: bool,
    for_trade: bool,
    wishlist: bool,
    wishlist_priority: Option<i64>,
}

impl CollectionBoardGame {
    pub fn from_value(value: &Value) -> Result<Self, InvalidRecordError> {
        Self::from_record(&Record::new(value, "collection item")?)
    }

    pub fn from_record(record: &Record<'_>) -> Result<Self, InvalidRecordError> {
        let base = BaseGame::from_record(record)?;

        let rating = record.lenient_float("rating");
        if rating.is_malformed() {
            log::debug!("Collection item {} has no numeric rating", base.id());
        }

        let flag = |key: &str| record.opt_bool(key).unwrap_or(false);
        Ok(Self {
            num_plays: record.opt_int("numplays").unwrap_or(0),
            last_modified: record.opt_str("lastmodified"),
            rating: rating.value(),
            owned: flag("own"),
            preordered: flag("preordered"),
            prev_owned: flag("prevowned"),
            want: flag("want"),
            want_to_buy: flag("wanttobuy"),
            want_to_play: flag("wanttoplay"),
            for_trade: flag("fortrade"),
            wishlist: flag("wishlist"),
            wishlist_priority: record.opt_int("wishlistpriority"),
            base,
        })
    }

    pub fn num_plays(&self) -> i64 {
        self.num_plays
    }

    /// When the user last changed this entry, as sent by the service.
    pub fn last_modified(&self) -> Option<&str> {
        self.last_modified.as_deref()
    }

    /// The user's own rating. `None` when the user has not rated the game.
    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    pub fn owned(&self) -> bool {
        self.owned
    }

    pub fn preordered(&self) -> bool {
        self.preordered
    }

    pub fn prev_owned(&self) -> bool {
        self.prev_owned
    }

    pub fn want(&self) -> bool {
        self.want
    }

    pub fn want_to_buy(&self) -> bool {
        self.want_to_buy
    }

    pub fn want_to_play(&self) -> bool {
        self.want_to_play
    }

    pub fn for_trade(&self) -> bool {
        self.for_trade
    }

    pub fn wishlist(&self) -> bool {
        self.wishlist
    }

    pub fn wishlist_priority(&self) -> Option<i64> {
        self.wishlist_priority
    }

    /// The collection entry's version, if the user picked one.
    pub fn version(&self) -> Option<&Version> {
        self.versions().first()
    }
}

impl Identified for CollectionBoardGame {
    fn id(&self) -> ThingId {
        self.base.id()
    }

    fn name(&self) -> Option<&str> {
        self.base.name()
    }
}

impl Game for CollectionBoardGame {
    fn base(&self) -> &BaseGame {
        &self.base
    }
}

impl fmt::Display for CollectionBoardGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CollectionBoardGame (id: {})", self.id())
    }
}

impl Describe for CollectionBoardGame {
    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        describe::field(out, "boardgame id", self.id())?;
        describe::opt_field(out, "boardgame name", self.name())?;
        describe::field(out, "number of plays", self.num_plays)?;
        describe::opt_field(out, "last modified", self.last_modified())?;
        describe::opt_field(out, "rating", self.rating)?;
        describe::field(out, "own", self.owned)?;
        describe::field(out, "preordered", self.preordered)?;
        describe::field(out, "previously owned", self.prev_owned)?;
        describe::field(out, "want", self.want)?;
        describe::field(out, "want to buy", self.want_to_buy)?;
        describe::field(out, "want to play", self.want_to_play)?;
        describe::field(out, "wishlist", self.wishlist)?;
        describe::opt_field(out, "wishlist priority", self.wishlist_priority)?;
        describe::field(out, "for trade", self.for_trade)?;
        for version in self.versions() {
            version.describe(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/collection_tests.rs"]
mod tests;
