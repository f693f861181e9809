//! Rating and ranking statistics attached to a game.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::describe::{self, Describe};
use crate::error::InvalidRecordError;
use crate::normalize::Lenient;
use crate::record::Record;
use crate::thing::ThingId;

/// Rank type that marks the overall board game rank.
pub const PRIMARY_RANK_TYPE: &str = "boardgame";

/// One entry of a game's ranking list (overall, family, subdomain...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rank {
    pub id: Option<ThingId>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub rank_type: Option<String>,
    pub friendly_name: Option<String>,
    /// Position in the ranking; `None` when the service reports "Not Ranked".
    pub value: Option<i64>,
    pub bayes_average: Option<f64>,
}

impl Rank {
    pub fn from_record(record: &Record<'_>) -> Self {
        Self {
            id: record.opt_int("id"),
            name: record.opt_str("name"),
            rank_type: record.opt_str("type"),
            friendly_name: record.opt_str("friendlyname"),
            value: record.opt_int("value"),
            bayes_average: record.opt_float("bayesaverage"),
        }
    }

    pub fn is_primary(&self) -> bool {
        self.rank_type.as_deref() == Some(PRIMARY_RANK_TYPE)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardGameRank(id: ")?;
        match self.id {
            Some(id) => write!(f, "{id}")?,
            None => write!(f, "-")?,
        }
        write!(f, ", name: {}", self.friendly_name.as_deref().unwrap_or("-"))?;
        match self.value {
            Some(v) => write!(f, ", value: {v})"),
            None => write!(f, ", value: -)"),
        }
    }
}

impl Describe for Rank {
    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        describe::opt_field(out, "rank type", self.rank_type.as_deref())?;
        describe::opt_field(out, "rank name", self.friendly_name.as_deref())?;
        describe::opt_field(out, "rank value", self.value)?;
        describe::opt_field(out, "rank bayes average", self.bayes_average)
    }
}

/// Aggregated user statistics for a game.
///
/// Every scalar is optional. `bgg_rank` is derived from the `ranks` list
/// while building and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    ranks: Vec<Rank>,
    #[serde(skip)]
    primary_rank: Lenient<i64>,
    bgg_rank: Option<i64>,
    users_rated: Option<i64>,
    rating_average: Option<f64>,
    rating_bayes_average: Option<f64>,
    rating_stddev: Option<f64>,
    rating_median: Option<f64>,
    users_owned: Option<i64>,
    users_trading: Option<i64>,
    users_wanting: Option<i64>,
    users_wishing: Option<i64>,
    users_commented: Option<i64>,
    rating_num_weights: Option<i64>,
    rating_average_weight: Option<f64>,
}

impl Statistics {
    pub fn from_value(value: &Value) -> Result<Self, InvalidRecordError> {
        Ok(Self::from_record(&Record::new(value, "stats")?))
    }

    /// Build from a `stats` mapping. Never fails: rank entries that are not
    /// mappings are skipped and missing scalars stay `None`.
    pub fn from_record(record: &Record<'_>) -> Self {
        let mut ranks = Vec::new();
        let mut primary_rank = Lenient::Absent;

        for raw in record.list("ranks") {
            let Ok(entry) = Record::new(raw, "rank") else {
                log::warn!("Skipping rank entry that is not a mapping: {raw}");
                continue;
            };
            let rank = Rank::from_record(&entry);
            if rank.is_primary() {
                // Last primary entry wins.
                primary_rank = entry.lenient_int("value");
                if let Lenient::Malformed(raw_value) = &primary_rank {
                    log::debug!("Primary rank value {raw_value:?} is not a number");
                }
            }
            ranks.push(rank);
        }

        Self {
            ranks,
            bgg_rank: primary_rank.clone().value(),
            primary_rank,
            users_rated: record.opt_int("usersrated"),
            rating_average: record.opt_float("average"),
            rating_bayes_average: record.opt_float("bayesaverage"),
            rating_stddev: record.opt_float("stddev"),
            rating_median: record.opt_float("median"),
            users_owned: record.opt_int("owned"),
            users_trading: record.opt_int("trading"),
            users_wanting: record.opt_int("wanting"),
            users_wishing: record.opt_int("wishing"),
            users_commented: record.opt_int("numcomments"),
            rating_num_weights: record.opt_int("numweights"),
            rating_average_weight: record.opt_float("averageweight"),
        }
    }

    /// All rank entries in the order the service returned them.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// The overall board game rank, if the game is ranked.
    pub fn bgg_rank(&self) -> Option<i64> {
        self.bgg_rank
    }

    /// How the primary rank was resolved, distinguishing a missing primary
    /// entry from one whose value was not numeric.
    pub fn primary_rank(&self) -> &Lenient<i64> {
        &self.primary_rank
    }

    pub fn users_rated(&self) -> Option<i64> {
        self.users_rated
    }

    pub fn rating_average(&self) -> Option<f64> {
        self.rating_average
    }

    pub fn rating_bayes_average(&self) -> Option<f64> {
        self.rating_bayes_average
    }

    pub fn rating_stddev(&self) -> Option<f64> {
        self.rating_stddev
    }

    pub fn rating_median(&self) -> Option<f64> {
        self.rating_median
    }

    pub fn users_owned(&self) -> Option<i64> {
        self.users_owned
    }

    pub fn users_trading(&self) -> Option<i64> {
        self.users_trading
    }

    pub fn users_wanting(&self) -> Option<i64> {
        self.users_wanting
    }

    pub fn users_wishing(&self) -> Option<i64> {
        self.users_wishing
    }

    pub fn users_commented(&self) -> Option<i64> {
        self.users_commented
    }

    pub fn rating_num_weights(&self) -> Option<i64> {
        self.rating_num_weights
    }

    pub fn rating_average_weight(&self) -> Option<f64> {
        self.rating_average_weight
    }
}

impl Describe for Statistics {
    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        describe::opt_field(out, "boardgame rank", self.bgg_rank)?;
        describe::opt_field(out, "users rated game", self.users_rated)?;
        describe::opt_field(out, "users avg rating", self.rating_average)?;
        describe::opt_field(out, "users b-avg rating", self.rating_bayes_average)?;
        describe::opt_field(out, "rating stddev", self.rating_stddev)?;
        describe::opt_field(out, "rating median", self.rating_median)?;
        describe::opt_field(out, "users commented", self.users_commented)?;
        describe::opt_field(out, "users owned", self.users_owned)?;
        describe::opt_field(out, "users wanting", self.users_wanting)?;
        describe::opt_field(out, "users wishing", self.users_wishing)?;
        describe::opt_field(out, "users trading", self.users_trading)?;
        describe::opt_field(out, "weight ratings", self.rating_num_weights)?;
        describe::opt_field(out, "average weight", self.rating_average_weight)?;
        describe::list(out, "ranks", &self.ranks)
    }
}

#[cfg(test)]
#[path = "tests/stats_tests.rs"]
mod tests;
