//! Per-round score values.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PlayerId;

/// Score breakdown for one player in one round.
///
/// `total` is supplied by the caller and is not derived from the other two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundScore {
    #[serde(default)]
    pub dutch: i32,
    #[serde(default)]
    pub blitz: i32,
    #[serde(default)]
    pub total: i32,
}

impl RoundScore {
    pub fn new(dutch: i32, blitz: i32, total: i32) -> Self {
        Self {
            dutch,
            blitz,
            total,
        }
    }
}

/// A player's entry in a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScore {
    pub player_id: PlayerId,
    pub score: RoundScore,
    /// Set once the player has finished entering their score.
    #[serde(default)]
    pub is_done: bool,
}

impl PlayerScore {
    pub fn new(player_id: PlayerId, score: RoundScore) -> Self {
        Self {
            player_id,
            score,
            is_done: false,
        }
    }
}

/// Per-player progress within a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRoundStatus {
    pub player_id: PlayerId,
    pub player_name: String,
    pub submitted: bool,
    pub is_done: bool,
    /// Round total, 0 when nothing was submitted.
    pub total: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_score_body_defaults_is_done() {
        let json = r#"{"playerId":"P1","score":{"dutch":4,"blitz":-2,"total":2}}"#;
        let score: PlayerScore = serde_json::from_str(json).unwrap();
        assert_eq!(score.player_id.as_str(), "P1");
        assert_eq!(score.score, RoundScore::new(4, -2, 2));
        assert!(!score.is_done);
    }

    #[test]
    fn round_status_serializes_camel_case() {
        let status = PlayerRoundStatus {
            player_id: PlayerId::new("P1").unwrap(),
            player_name: "Alice".to_string(),
            submitted: true,
            is_done: false,
            total: 10,
        };
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json["playerName"], "Alice");
        assert_eq!(json["isDone"], false);
        assert_eq!(json["total"], 10);
    }
}
