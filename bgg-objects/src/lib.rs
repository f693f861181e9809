//! Typed object model for board game records.
//!
//! Turns already-decoded, loosely-typed mapping data (as produced by an
//! upstream XML/JSON parser) into validated entities: games, their versions,
//! videos, rankings, statistics, poll results and user comments. Lists keyed
//! by id are deduplicated, keeping the first occurrence.

pub mod collection;
pub mod comment;
pub mod describe;
pub mod error;
pub mod game;
pub mod id_list;
pub mod normalize;
pub mod polls;
pub mod record;
pub mod stats;
pub mod thing;
pub mod version;
pub mod video;

pub use collection::CollectionBoardGame;
pub use comment::{Comment, UNRATED};
pub use describe::Describe;
pub use error::{EntryKind, InvalidRecordError};
pub use game::{BaseGame, BoardGame, Game};
pub use id_list::IdList;
pub use normalize::{Lenient, fix_unsigned_negative, fix_url, parse_post_date};
pub use polls::{LanguageDependenceResult, PlayerAgeResult, PlayerCountResult};
pub use record::Record;
pub use stats::{PRIMARY_RANK_TYPE, Rank, Statistics};
pub use thing::{Identified, Thing, ThingId};
pub use version::Version;
pub use video::Video;
