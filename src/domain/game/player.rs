//! Player entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PlayerId;

/// A participant in a game session.
///
/// Doubles as the join request body: `score` and `isReady` may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    id: PlayerId,
    name: String,
    #[serde(default)]
    score: i32,
    #[serde(default)]
    is_ready: bool,
}

impl Player {
    /// Creates a player who is not yet ready, with a zero score.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            is_ready: false,
        }
    }

    /// Creates the hosting player, who is ready from the start.
    pub fn host(id: PlayerId, name: impl Into<String>) -> Self {
        Self::new(id, name).with_ready(true)
    }

    pub fn with_ready(mut self, is_ready: bool) -> Self {
        self.is_ready = is_ready;
        self
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cumulative score across completed rounds.
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    pub(crate) fn toggle_ready(&mut self) {
        self.is_ready = !self.is_ready;
    }

    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn credit(&mut self, points: i32) {
        self.score = self.score.saturating_add(points);
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> PlayerId {
        PlayerId::new(s).unwrap()
    }

    #[test]
    fn host_is_ready() {
        let host = Player::host(pid("P1"), "Alice");
        assert!(host.is_ready());
        assert_eq!(host.score(), 0);
    }

    #[test]
    fn new_player_is_not_ready() {
        assert!(!Player::new(pid("P2"), "Bob").is_ready());
    }

    #[test]
    fn credit_accumulates_negative_and_positive() {
        let mut player = Player::new(pid("P1"), "Alice");
        player.credit(12);
        player.credit(-5);
        assert_eq!(player.score(), 7);
    }

    #[test]
    fn deserializes_join_body_with_defaults() {
        let player: Player = serde_json::from_str(r#"{"id":"P2","name":"Bob"}"#).unwrap();
        assert_eq!(player.id().as_str(), "P2");
        assert_eq!(player.score(), 0);
        assert!(!player.is_ready());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(Player::host(pid("P1"), "Alice")).unwrap();
        assert_eq!(json["isReady"], true);
        assert_eq!(json["score"], 0);
    }
}
