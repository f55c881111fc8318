//! Unit tests for stat normalization

use super::*;
use crate::cli::types::{PlayerId, PlayerTag};

fn int_record(name: &str, value: i64, modified: &str) -> StatRecord {
    StatRecord {
        name: name.to_string(),
        modified: Timestamp::new(modified),
        int_value: Some(value),
        string_value: None,
    }
}

fn text_record(name: &str, value: &str, modified: &str) -> StatRecord {
    StatRecord {
        name: name.to_string(),
        modified: Timestamp::new(modified),
        int_value: None,
        string_value: Some(value.to_string()),
    }
}

fn stats_with(keys: &[(&str, i64)]) -> StatsMap {
    let records: Vec<_> = keys
        .iter()
        .map(|(k, v)| int_record(k, *v, "t"))
        .collect();
    normalize(&records)
}

#[cfg(test)]
mod normalize_tests {
    use super::*;

    #[test]
    fn test_normalize_single_int_record() {
        let stats = normalize(&[int_record("total_wins", 5, "T1")]);

        assert_eq!(stats.len(), 1);
        assert_eq!(
            stats["total_wins"],
            NormalizedStat {
                value: StatValue::Int(5),
                modified: Timestamp::new("T1"),
            }
        );
    }

    #[test]
    fn test_normalize_one_entry_per_unique_record() {
        let records = vec![
            int_record("total_wins", 5, "T1"),
            text_record("cardback_ranked", "gold", "T2"),
            int_record("total_lost", 2, "T3"),
        ];

        let stats = normalize(&records);
        assert_eq!(stats.len(), records.len());
        assert_eq!(stats["cardback_ranked"].value, StatValue::Text("gold".into()));
        assert_eq!(stats["total_lost"].modified.as_str(), "T3");
    }

    #[test]
    fn test_string_value_takes_precedence() {
        let record = StatRecord {
            name: "elo_bump_floor".to_string(),
            modified: Timestamp::new("T1"),
            int_value: Some(1200),
            string_value: Some("Silver".to_string()),
        };

        let stats = normalize(&[record]);
        assert_eq!(stats["elo_bump_floor"].value, StatValue::Text("Silver".into()));
    }

    #[test]
    fn test_duplicate_names_last_wins() {
        let records = vec![
            int_record("total_wins", 5, "T1"),
            int_record("total_lost", 1, "T1"),
            text_record("total_wins", "seven", "T2"),
        ];

        let stats = normalize(&records);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats["total_wins"].value, StatValue::Text("seven".into()));
        assert_eq!(stats["total_wins"].modified.as_str(), "T2");
    }

    #[test]
    fn test_record_without_value_is_absent() {
        let record = StatRecord {
            name: "broken".to_string(),
            modified: Timestamp::new("T1"),
            int_value: None,
            string_value: None,
        };

        let stats = normalize(&[record]);
        assert!(!stats.contains_key("broken"));
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize(&Vec::<StatRecord>::new()).is_empty());
    }
}

#[cfg(test)]
mod season_tests {
    use super::*;

    #[test]
    fn test_derive_seasons_ascending_and_sparse() {
        let stats = stats_with(&[("s3_wins", 30), ("s1_wins", 10), ("s12_wins", 120)]);

        let seasons = derive_seasons(&stats);
        let indices: Vec<u32> = seasons.iter().map(|s| s.season).collect();
        assert_eq!(indices, vec![1, 3, 12]);
        assert_eq!(seasons[1].label, "Season 3 wins:");
        assert_eq!(seasons[1].value, StatValue::Int(30));
    }

    #[test]
    fn test_derive_seasons_bounds() {
        let stats = stats_with(&[("s0_wins", 1), ("s30_wins", 2), ("s31_wins", 3)]);

        let seasons = derive_seasons(&stats);
        assert_eq!(seasons.len(), 1);
        assert_eq!(seasons[0].season, MAX_SEASON);
        assert_eq!(seasons[0].label, "Season 30 wins:");
    }

    #[test]
    fn test_derive_seasons_empty_without_season_keys() {
        let stats = stats_with(&[("total_wins", 5), ("s1_losses", 2), ("season1_wins", 3)]);
        assert!(derive_seasons(&stats).is_empty());
        assert!(derive_seasons(&StatsMap::new()).is_empty());
    }

    #[test]
    fn test_season_wins_key() {
        assert_eq!(season_wins_key(7), "s7_wins");
    }
}

#[cfg(test)]
mod player_stats_tests {
    use super::*;

    fn player() -> Player {
        Player {
            id: PlayerId::new("499626"),
            name: "FuTBoL".to_string(),
            tag: PlayerTag::new(3801),
        }
    }

    #[test]
    fn test_elo_bump_floor_fallback() {
        let unranked = PlayerStats::new(player(), &[int_record("total_wins", 5, "T1")]);
        assert_eq!(unranked.elo_bump_floor(), NO_RANK);

        let ranked = PlayerStats::new(player(), &[int_record(ELO_BUMP_FLOOR, 1400, "T1")]);
        assert_eq!(ranked.elo_bump_floor(), "1400");
    }

    #[test]
    fn test_value_lookup_and_emptiness() {
        let stats = PlayerStats::new(player(), &[int_record("total_wins", 5, "T1")]);
        assert!(!stats.is_empty());
        assert_eq!(stats.value("total_wins"), Some(&StatValue::Int(5)));
        assert_eq!(stats.value("total_lost"), None);

        assert!(PlayerStats::new(player(), &[]).is_empty());
    }

    #[test]
    fn test_stat_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&StatValue::Int(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&StatValue::Text("x".into())).unwrap(),
            "\"x\""
        );
    }
}
