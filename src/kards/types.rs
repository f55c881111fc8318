use crate::cli::types::{PlayerId, PlayerTag};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;


/// Last-modified time of a stat as sent by the server.
///
/// Kept as text; numeric epoch values are accepted and stored as their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Timestamp(pub String);

impl Timestamp {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawTimestamp {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match RawTimestamp::deserialize(deserializer)? {
            RawTimestamp::Text(s) => Timestamp(s),
            RawTimestamp::Int(n) => Timestamp(n.to_string()),
            RawTimestamp::Float(n) => Timestamp(n.to_string()),
        })
    }
}

/// One stat row from a `Stats` payload.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatRecord {
    #[serde(rename = "stat_name")]
    pub name: String,
    pub modified: Timestamp,
    #[serde(rename = "stat_int", default)]
    pub int_value: Option<i64>,
    #[serde(rename = "stat_string", default)]
    pub string_value: Option<String>,
}

/// Player identity as returned by the stats service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub tag: PlayerTag,
}

/// Body of a `Stats` payload
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatsResult {
    pub player: Player,
    #[serde(default)]
    pub stats: Vec<StatRecord>,
}

/// Body of an `Error` payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResult {
    pub error: String,
}

/// Body of a `QueueResult` payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct QueueResult {
    pub queued: bool,
}

/// Answer to `statsByName` / the `statsById` query, discriminated by `__typename`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "__typename")]
pub enum StatsPayload {
    Stats(StatsResult),
    Error(ErrorResult),
    #[serde(other)]
    Unrecognized,
}

/// Answer to the `statsById` mutation, discriminated by `__typename`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "__typename")]
pub enum UpdatePayload {
    QueueResult(QueueResult),
    Error(ErrorResult),
    #[serde(other)]
    Unrecognized,
}

/// Decode a union payload, treating any shape mismatch as `Unrecognized`.
pub trait FromPayload: Sized {
    fn unrecognized() -> Self;

    fn from_payload(value: serde_json::Value) -> Self
    where
        Self: for<'de> Deserialize<'de>,
    {
        match serde_json::from_value(value) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!(error = %e, "payload did not match any known variant");
                Self::unrecognized()
            }
        }
    }
}

impl FromPayload for StatsPayload {
    fn unrecognized() -> Self {
        StatsPayload::Unrecognized
    }
}

impl FromPayload for UpdatePayload {
    fn unrecognized() -> Self {
        UpdatePayload::Unrecognized
    }
}

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}
