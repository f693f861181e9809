//! Vote tallies from the community polls shown on a game page.
//!
//! These are flat projections of the poll `results` mapping. The label is
//! whatever key the service used and is not validated. Missing vote counts
//! default to zero, so none of these can fail to build.

use std::fmt;

use serde::Serialize;

use crate::describe::Describe;
use crate::record::Record;

/// Votes for one player count in the "suggested number of players" poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerCountResult {
    /// Player count label, e.g. `"3"` or `"4+"`.
    pub player_count: String,
    pub votes_best: i64,
    pub votes_recommended: i64,
    pub votes_not_recommended: i64,
}

/// Votes for one age bracket in the "suggested player age" poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerAgeResult {
    pub age: String,
    pub votes: i64,
}

/// Votes for one level in the "language dependence" poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageDependenceResult {
    pub level: String,
    pub description: String,
    pub votes: i64,
}

impl PlayerCountResult {
    pub fn from_entry(label: &str, entry: Option<Record<'_>>) -> Self {
        let votes = |key| entry.and_then(|r| r.opt_int(key)).unwrap_or(0);
        Self {
            player_count: label.to_string(),
            votes_best: votes("best"),
            votes_recommended: votes("recommended"),
            votes_not_recommended: votes("not_recommended"),
        }
    }
}

impl LanguageDependenceResult {
    pub fn from_entry(label: &str, entry: Option<Record<'_>>) -> Self {
        Self {
            level: label.to_string(),
            description: entry
                .and_then(|r| r.opt_str("description"))
                .unwrap_or_default(),
            votes: entry.and_then(|r| r.opt_int("num_votes")).unwrap_or(0),
        }
    }
}

/// Build one result per key of `poll.results`, in input order.
///
/// An absent poll, or one without a `results` mapping, yields an empty list.
pub(crate) fn collect_results<T>(
    game: &Record<'_>,
    poll_key: &'static str,
    build: impl Fn(&str, &serde_json::Value) -> T,
) -> Vec<T> {
    let Some(Ok(poll)) = game.sub_record(poll_key) else {
        return Vec::new();
    };
    let Some(Ok(results)) = poll.sub_record("results") else {
        return Vec::new();
    };
    results
        .entries()
        .map(|(label, raw)| build(label, raw))
        .collect()
}

pub(crate) fn player_count_results(game: &Record<'_>) -> Vec<PlayerCountResult> {
    collect_results(game, "suggested_numplayers", |label, raw| {
        PlayerCountResult::from_entry(label, Record::new(raw, "poll result").ok())
    })
}

pub(crate) fn player_age_results(game: &Record<'_>) -> Vec<PlayerAgeResult> {
    collect_results(game, "suggested_playerage", |label, raw| PlayerAgeResult {
        age: label.to_string(),
        votes: crate::record::coerce_int(raw).unwrap_or(0),
    })
}

pub(crate) fn language_dependence_results(game: &Record<'_>) -> Vec<LanguageDependenceResult> {
    collect_results(game, "language_dependence", |label, raw| {
        LanguageDependenceResult::from_entry(label, Record::new(raw, "poll result").ok())
    })
}

impl fmt::Display for PlayerCountResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} players: votes: {} for best, {} for recommended, {} for not recommended",
            self.player_count, self.votes_best, self.votes_recommended, self.votes_not_recommended
        )
    }
}

impl fmt::Display for PlayerAgeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years: votes: {}", self.age, self.votes)
    }
}

impl fmt::Display for LanguageDependenceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (level {}): votes: {}",
            self.description, self.level, self.votes
        )
    }
}

impl Describe for PlayerCountResult {
    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "> {self}")
    }
}

impl Describe for PlayerAgeResult {
    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "> {self}")
    }
}

impl Describe for LanguageDependenceResult {
    fn describe(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "> {self}")
    }
}

#[cfg(test)]
#[path = "tests/polls_tests.rs"]
mod tests;
