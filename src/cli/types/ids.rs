//! ID types for KARDS players.

use crate::error::{KardsError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a player id typed by the user.
pub const PLAYER_ID_DIGITS: usize = 6;

/// Number of digits in a player tag (the part after `#`).
pub const PLAYER_TAG_DIGITS: usize = 4;

/// Type-safe wrapper for KARDS player ids.
///
/// The stats service returns ids as strings (e.g. `"499626"`) and accepts them
/// back as GraphQL `Int`s, so the decimal text is kept as-is.
///
/// # Examples
///
/// ```rust
/// use kards_stats::PlayerId;
///
/// let id: PlayerId = "499626".parse().unwrap();
/// assert_eq!(id.as_str(), "499626");
/// assert_eq!(id.as_u64().unwrap(), 499626);
/// assert!("49962".parse::<PlayerId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wrap an id without validating its length.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric form used for GraphQL `Int` variables.
    pub fn as_u64(&self) -> Result<u64> {
        self.0.parse().map_err(|_| KardsError::InvalidPlayerId {
            value: self.0.clone(),
        })
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = KardsError;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() == PLAYER_ID_DIGITS && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(KardsError::InvalidPlayerId {
                value: s.to_string(),
            })
        }
    }
}

/// Server ids arrive as either JSON strings or numbers.
impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => PlayerId(s),
            RawId::Number(n) => PlayerId(n.to_string()),
        })
    }
}

/// Type-safe wrapper for the numeric tag in `Name#1234`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerTag(pub u16);

impl PlayerTag {
    pub fn new(tag: u16) -> Self {
        Self(tag)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for PlayerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerTag {
    type Err = KardsError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || KardsError::InvalidTag {
            value: s.to_string(),
        };
        if s.len() != PLAYER_TAG_DIGITS || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        s.parse().map(Self).map_err(|_| invalid())
    }
}
