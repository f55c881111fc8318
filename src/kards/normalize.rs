//! Normalization of raw stat records into a keyed map, plus derived views.
//!
//! The stats service returns a flat list of records where each value is either
//! an integer or a string. [`normalize`] folds that list into a [`StatsMap`]
//! keyed by stat name, and [`derive_seasons`] extracts the per-season win
//! counts stored under the `s{n}_wins` keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::kards::types::{Player, StatRecord, Timestamp};

#[cfg(test)]
mod tests;

/// Highest season index scanned by [`derive_seasons`].
pub const MAX_SEASON: u32 = 30;

/// Stat shown when present, with its display label.
pub const PRESENTED_STATS: [(&str, &str); 11] = [
    ("cardback_ranked", "Cardback Ranked"),
    ("current_winning_streak", "Current Winning Streak"),
    ("current_winning_streak_battle", "Current Winning Streak Battle"),
    ("current_losing_streak_battle", "Current Losing Streak Battle"),
    ("open_pack_bonus", "Open Pack Bonus"),
    ("pity_elite_counter", "Pity Elite Counter"),
    ("pity_elite_counter_big", "Pity Elite Counter Big"),
    ("total_battles_played", "Total Battles Played"),
    ("total_lost", "Total Lost"),
    ("total_wins", "Total Wins"),
    ("wins_for_gold", "Wins for Gold"),
];

pub const ELO_BUMP_FLOOR: &str = "elo_bump_floor";

/// Shown in place of `elo_bump_floor` for players without a rank.
pub const NO_RANK: &str = "No Rank";

/// A normalized stat value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Int(n) => write!(f, "{}", n),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedStat {
    pub value: StatValue,
    pub modified: Timestamp,
}

/// Stats keyed by name; a missing key means the server has no value for it.
pub type StatsMap = BTreeMap<String, NormalizedStat>;

/// One entry of the per-season wins series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonEntry {
    pub season: u32,
    pub label: String,
    pub value: StatValue,
}

/// Key under which the wins of `season` are stored.
pub fn season_wins_key(season: u32) -> String {
    format!("s{}_wins", season)
}

/// Fold records into a map keyed by stat name.
///
/// `stat_string` takes precedence over `stat_int`. Later records overwrite
/// earlier ones with the same name. Records carrying neither value are skipped.
pub fn normalize<'a, I>(records: I) -> StatsMap
where
    I: IntoIterator<Item = &'a StatRecord>,
{
    let mut stats = StatsMap::new();
    for record in records {
        let value = match (&record.string_value, record.int_value) {
            (Some(s), _) => StatValue::Text(s.clone()),
            (None, Some(n)) => StatValue::Int(n),
            (None, None) => {
                tracing::debug!(stat = %record.name, "skipping stat record without a value");
                continue;
            }
        };
        stats.insert(
            record.name.clone(),
            NormalizedStat {
                value,
                modified: record.modified.clone(),
            },
        );
    }
    stats
}

/// Season wins for seasons `1..=MAX_SEASON` that are present, in ascending order.
pub fn derive_seasons(stats: &StatsMap) -> Vec<SeasonEntry> {
    (1..=MAX_SEASON)
        .filter_map(|season| {
            stats.get(&season_wins_key(season)).map(|stat| SeasonEntry {
                season,
                label: format!("Season {} wins:", season),
                value: stat.value.clone(),
            })
        })
        .collect()
}

/// A loaded player together with their normalized stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub player: Player,
    pub stats: StatsMap,
}

impl PlayerStats {
    pub fn new(player: Player, records: &[StatRecord]) -> Self {
        Self {
            player,
            stats: normalize(records),
        }
    }

    /// True when the server knows the player but has not computed stats yet.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn value(&self, key: &str) -> Option<&StatValue> {
        self.stats.get(key).map(|stat| &stat.value)
    }

    pub fn seasons(&self) -> Vec<SeasonEntry> {
        derive_seasons(&self.stats)
    }

    /// `elo_bump_floor`, or [`NO_RANK`] when absent.
    pub fn elo_bump_floor(&self) -> String {
        self.value(ELO_BUMP_FLOOR)
            .map(|v| v.to_string())
            .unwrap_or_else(|| NO_RANK.to_string())
    }
}
