//! Canonical player record and endpoint payload normalization.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::types::PlayerId;

#[cfg(test)]
mod tests;

/// Name keys probed in priority order. The community endpoints never agreed
/// on a field name for the display name.
const NAME_KEYS: &[&str] = &["name", "nickname", "playerName"];

/// Normalized, endpoint-agnostic lookup result.
///
/// Built fresh for every query and immutable afterwards. `status` is true
/// iff one of the recognized name keys carried a usable value; the numeric
/// fields are populated independently of the name probe, so a record can
/// hold real level/kill counts while still reporting `status == false`.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerRecord {
    pub status: bool,
    pub player_id: String,
    pub name: String,
    pub level: u64,
    pub rank: String,
    pub kills: u64,
    pub wins: u64,
    /// Payload exactly as the endpoint returned it, kept for diagnostics.
    pub raw: Value,
}

impl PlayerRecord {
    /// All-default record for `player_id` carrying `raw`.
    pub fn not_found(player_id: &PlayerId, raw: Value) -> Self {
        Self {
            status: false,
            player_id: player_id.to_string(),
            name: "Not Found".to_string(),
            level: 0,
            rank: "Unknown".to_string(),
            kills: 0,
            wins: 0,
            raw,
        }
    }

    /// Fold one endpoint's decoded payload into the canonical record.
    ///
    /// Non-object payloads yield the all-default record. Field extraction
    /// fails soft: absent, null, or mistyped values leave the default in
    /// place. Never panics.
    pub fn from_payload(payload: Value, player_id: &PlayerId) -> Self {
        let mut record = Self::not_found(player_id, Value::Null);

        if let Some(map) = payload.as_object() {
            for key in NAME_KEYS {
                if let Some(name) = string_field(map, key) {
                    record.name = name;
                    record.status = true;
                    break;
                }
            }

            if let Some(level) = u64_field(map, "level") {
                record.level = level;
            }
            if let Some(rank) = string_field(map, "rank") {
                record.rank = rank;
            }
            if let Some(kills) = u64_field(map, "kills") {
                record.kills = kills;
            }
            if let Some(wins) = u64_field(map, "wins") {
                record.wins = wins;
            }
        }

        record.raw = payload;
        record
    }
}

/// String-valued field lookup. Numeric scalars are accepted and rendered as
/// strings since some endpoints return numeric ranks; anything else counts
/// as absent.
fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Unsigned-integer field lookup; absent, null, or mistyped values yield `None`.
fn u64_field(map: &Map<String, Value>, key: &str) -> Option<u64> {
    map.get(key)?.as_u64()
}
