//! Game aggregates: the shared [`BaseGame`] core and the full [`BoardGame`].

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::comment::Comment;
use crate::describe::{self, Describe};
use crate::error::{EntryKind, InvalidRecordError};
use crate::id_list::IdList;
use crate::normalize::{Lenient, fix_url};
use crate::polls::{self, LanguageDependenceResult, PlayerAgeResult, PlayerCountResult};
use crate::record::Record;
use crate::stats::{Rank, Statistics};
use crate::thing::{Identified, Thing, ThingId};
use crate::version::Version;
use crate::video::Video;

/// Fields shared by every game-shaped record, whether it came from a full
/// game lookup or from a user's collection.
#[derive(Debug, Clone, Serialize)]
pub struct BaseGame {
    #[serde(flatten)]
    thing: Thing,
    year: Option<i64>,
    thumbnail: Option<String>,
    image: Option<String>,
    min_players: Option<i64>,
    max_players: Option<i64>,
    min_playing_time: Option<i64>,
    max_playing_time: Option<i64>,
    playing_time: Option<i64>,
    stats: Statistics,
    versions: IdList<Version>,
}

impl BaseGame {
    pub fn from_value(value: &Value) -> Result<Self, InvalidRecordError> {
        Self::from_record(&Record::new(value, "game")?)
    }

    /// Build the shared game core.
    ///
    /// Fails if `stats` is missing, if any version lacks an id, or if the
    /// game's own `id` is missing. Everything else is optional.
    pub fn from_record(record: &Record<'_>) -> Result<Self, InvalidRecordError> {
        let stats = match record.sub_record("stats") {
            Some(stats) => Statistics::from_record(&stats?),
            None => return Err(InvalidRecordError::missing("stats")),
        };

        let year = record.lenient_signed("yearpublished");
        if let Lenient::Malformed(raw) = &year {
            log::warn!("Ignoring unusable publication year {raw:?}");
        }

        let versions = IdList::from_records(
            record.list("versions"),
            EntryKind::Version,
            Version::from_record,
        )?;

        Ok(Self {
            thing: Thing::from_record(record)?,
            year: year.value(),
            thumbnail: record.opt_str("thumbnail").and_then(|u| fix_url(&u)),
            image: record.opt_str("image").and_then(|u| fix_url(&u)),
            min_players: record.opt_int("minplayers"),
            max_players: record.opt_int("maxplayers"),
            min_playing_time: record.opt_int("minplaytime"),
            max_playing_time: record.opt_int("maxplaytime"),
            playing_time: record.opt_int("playingtime"),
            stats,
            versions,
        })
    }
}

impl Identified for BaseGame {
    fn id(&self) -> ThingId {
        self.thing.id()
    }

    fn name(&self) -> Option<&str> {
        self.thing.name()
    }
}

/// Read access shared by all game aggregates.
///
/// Implementors only provide [`Game::base`]; everything else reads from it.
pub trait Game: Identified {
    fn base(&self) -> &BaseGame;

    /// Publication year. Negative for BCE.
    fn year(&self) -> Option<i64> {
        self.base().year
    }

    fn thumbnail(&self) -> Option<&str> {
        self.base().thumbnail.as_deref()
    }

    fn image(&self) -> Option<&str> {
        self.base().image.as_deref()
    }

    fn min_players(&self) -> Option<i64> {
        self.base().min_players
    }

    fn max_players(&self) -> Option<i64> {
        self.base().max_players
    }

    fn min_playing_time(&self) -> Option<i64> {
        self.base().min_playing_time
    }

    fn max_playing_time(&self) -> Option<i64> {
        self.base().max_playing_time
    }

    fn playing_time(&self) -> Option<i64> {
        self.base().playing_time
    }

    fn stats(&self) -> &Statistics {
        &self.base().stats
    }

    fn versions(&self) -> &[Version] {
        self.base().versions.as_slice()
    }

    fn ranks(&self) -> &[Rank] {
        self.stats().ranks()
    }

    fn bgg_rank(&self) -> Option<i64> {
        self.stats().bgg_rank()
    }

    fn users_rated(&self) -> Option<i64> {
        self.stats().users_rated()
    }

    fn rating_average(&self) -> Option<f64> {
        self.stats().rating_average()
    }

    fn rating_bayes_average(&self) -> Option<f64> {
        self.stats().rating_bayes_average()
    }

    fn rating_stddev(&self) -> Option<f64> {
        self.stats().rating_stddev()
    }

    fn rating_median(&self) -> Option<f64> {
        self.stats().rating_median()
    }

    fn users_owned(&self) -> Option<i64> {
        self.stats().users_owned()
    }

    fn users_trading(&self) -> Option<i64> {
        self.stats().users_trading()
    }

    fn users_wanting(&self) -> Option<i64> {
        self.stats().users_wanting()
    }

    fn users_wishing(&self) -> Option<i64> {
        self.stats().users_wishing()
    }

    fn users_commented(&self) -> Option<i64> {
        self.stats().users_commented()
    }

    fn rating_num_weights(&self) -> Option<i64> {
        self.stats().rating_num_weights()
    }

    fn rating_average_weight(&self) -> Option<f64> {
        self.stats().rating_average_weight()
    }
}

impl Game for BaseGame {
    fn base(&self) -> &BaseGame {
        self
    }
}

/// A game as returned by a full game lookup.
///
/// Immutable after construction except for three append-only lists:
/// comments, expansions and expanded games. The latter two stay unique by
/// id through [`BoardGame::add_expansion`] and
/// [`BoardGame::add_expanded_game`].
#[derive(Debug, Clone, Serialize)]
pub struct BoardGame {
    #[serde(flatten)]
    base: BaseGame,
    expansion: bool,
    min_age: Option<i64>,
    description: String,
    alternative_names: Vec<String>,
    categories: Vec<String>,
    families: Vec<String>,
    mechanics: Vec<String>,
    implementations: Vec<String>,
    designers: Vec<String>,
    artists: Vec<String>,
    publishers: Vec<String>,
    expansions: IdList<Thing>,
    expands: IdList<Thing>,
    videos: IdList<Video>,
    comments: Vec<Comment>,
    player_count_votes: Vec<PlayerCountResult>,
    player_age_votes: Vec<PlayerAgeResult>,
    language_dependence_votes: Vec<LanguageDependenceResult>,
}

impl BoardGame {
    pub fn from_value(value: &Value) -> Result<Self, InvalidRecordError> {
        Self::from_record(&Record::new(value, "game")?)
    }

    /// Build a game from a full game record.
    ///
    /// Expansions, expanded games, videos and versions are deduplicated by
    /// id, keeping the first occurrence; an element without an id fails the
    /// whole construction with an [`InvalidRecordError::InvalidEntry`].
    pub fn from_record(record: &Record<'_>) -> Result<Self, InvalidRecordError> {
        let base = BaseGame::from_record(record)?;

        let expansions = IdList::from_records(
            record.list("expansions"),
            EntryKind::Expansion,
            Thing::from_record,
        )?;
        let expands = IdList::from_records(
            record.list("expands"),
            EntryKind::ExpandedGame,
            Thing::from_record,
        )?;
        let videos =
            IdList::from_records(record.list("videos"), EntryKind::Video, Video::from_record)?;

        let mut game = Self {
            base,
            expansion: record.opt_bool("expansion").unwrap_or(false),
            min_age: record.opt_int("minage"),
            description: record.opt_str("description").unwrap_or_default(),
            alternative_names: record.string_list("alternative_names"),
            categories: record.string_list("categories"),
            families: record.string_list("families"),
            mechanics: record.string_list("mechanics"),
            implementations: record.string_list("implementations"),
            designers: record.string_list("designers"),
            artists: record.string_list("artists"),
            publishers: record.string_list("publishers"),
            expansions,
            expands,
            videos,
            comments: Vec::new(),
            player_count_votes: polls::player_count_results(record),
            player_age_votes: polls::player_age_results(record),
            language_dependence_votes: polls::language_dependence_results(record),
        };

        for raw in record.list("comments") {
            game.add_comment(raw)
                .map_err(|e| InvalidRecordError::entry(EntryKind::Comment, e))?;
        }

        Ok(game)
    }

    /// Record an expansion of this game.
    ///
    /// Returns `Ok(false)` without changing anything if an expansion with the
    /// same id is already known.
    pub fn add_expansion(&mut self, data: &Value) -> Result<bool, InvalidRecordError> {
        self.expansions
            .insert_record(data, EntryKind::Expansion, Thing::from_record)
    }

    /// Record a game that this game expands.
    ///
    /// Returns `Ok(false)` without changing anything if a game with the same
    /// id is already known.
    pub fn add_expanded_game(&mut self, data: &Value) -> Result<bool, InvalidRecordError> {
        self.expands
            .insert_record(data, EntryKind::ExpandedGame, Thing::from_record)
    }

    /// Append a comment. Comments have no id, so identical comments are all
    /// kept.
    pub fn add_comment(&mut self, data: &Value) -> Result<(), InvalidRecordError> {
        self.comments.push(Comment::from_value(data)?);
        Ok(())
    }

    /// Whether this game is itself an expansion of another game.
    pub fn is_expansion(&self) -> bool {
        self.expansion
    }

    pub fn min_age(&self) -> Option<i64> {
        self.min_age
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn alternative_names(&self) -> &[String] {
        &self.alternative_names
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    pub fn mechanics(&self) -> &[String] {
        &self.mechanics
    }

    pub fn implementations(&self) -> &[String] {
        &self.implementations
    }

    pub fn designers(&self) -> &[String] {
        &self.designers
    }

    pub fn artists(&self) -> &[String] {
        &self.artists
    }

    pub fn publishers(&self) -> &[String] {
        &self.publishers
    }

    /// Expansions of this game, unique by id, in insertion order.
    pub fn expansions(&self) -> &[Thing] {
        self.expansions.as_slice()
    }

    /// Games this game expands, unique by id, in insertion order.
    pub fn expands(&self) -> &[Thing] {
        self.expands.as_slice()
    }

    pub fn videos(&self) -> &[Video] {
        self.videos.as_slice()
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn player_count_votes(&self) -> &[PlayerCountResult] {
        &self.player_count_votes
    }

    pub fn player_age_votes(&self) -> &[PlayerAgeResult] {
        &self.player_age_votes
    }

    pub fn language_dependence_votes(&self) -> &[LanguageDependenceResult] {
        &self.language_dependence_votes
    }
}

impl Identified for BoardGame {
    fn id(&self) -> ThingId {
        self.base.id()
    }

    fn name(&self) -> Option<&str> {
        self.base.name()
    }
}

impl Game for BoardGame {
    fn base(&self) -> &BaseGame {
        &self.base
    }
}

impl fmt::Display for BoardGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardGame (id: {})", self.id())
    }
}

fn names(things: &[Thing]) -> Vec<&str> {
    things.iter().map(|t| t.name().unwrap_or("-")).collect()
}

impl Describe for BoardGame {
    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        describe::field(out, "boardgame id", self.id())?;
        describe::opt_field(out, "boardgame name", self.name())?;
        describe::opt_field(out, "boardgame rank", self.bgg_rank())?;
        for alt in &self.alternative_names {
            describe::field(out, "alternative name", alt)?;
        }
        describe::opt_field(out, "year published", self.year())?;
        describe::opt_field(out, "minimum players", self.min_players())?;
        describe::opt_field(out, "maximum players", self.max_players())?;
        describe::opt_field(out, "playing time", self.playing_time())?;
        describe::opt_field(out, "minimum age", self.min_age)?;
        describe::opt_field(out, "thumbnail", self.thumbnail())?;
        describe::opt_field(out, "image", self.image())?;
        describe::field(out, "is expansion", self.expansion)?;
        describe::list(out, "expansions", &names(self.expansions()))?;
        describe::list(out, "expands", &names(self.expands()))?;
        describe::list(out, "categories", &self.categories)?;
        describe::list(out, "families", &self.families)?;
        describe::list(out, "mechanics", &self.mechanics)?;
        describe::list(out, "implementations", &self.implementations)?;
        describe::list(out, "designers", &self.designers)?;
        describe::list(out, "artists", &self.artists)?;
        describe::list(out, "publishers", &self.publishers)?;
        describe::nested(out, "videos", self.videos())?;
        describe::nested(out, "versions", self.versions())?;
        describe::nested(out, "poll: player number results", &self.player_count_votes)?;
        describe::nested(out, "poll: player age results", &self.player_age_votes)?;
        describe::nested(
            out,
            "poll: language dependence results",
            &self.language_dependence_votes,
        )?;
        self.stats().describe(out)?;
        describe::field(out, "description", &self.description)?;
        for comment in &self.comments {
            comment.describe(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/game_tests.rs"]
mod tests;
