//! GameSession aggregate.
//!
//! A session owns its roster and its rounds. Every mutation validates fully
//! before touching state, so a failed call leaves the session unchanged.
//!
//! # Lifecycle
//!
//! ```text
//! Created ──(all players ready, start)──► Started
//!    │                                       │
//!    └── join / leave / toggle ready ────────┴── rounds: Open → AllSubmitted → Done
//! ```
//!
//! `Started` is one-way. Removing the last player empties the roster; the
//! store treats an empty session as gone.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GameId, PlayerId, RoundId};

use super::{GameError, Player, PlayerRoundStatus, PlayerScore, Round};

/// Score limit used when a create request does not name one.
pub const DEFAULT_SCORE_LIMIT: i32 = 75;

/// Raw create request as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGame {
    pub game_id: String,
    pub host_player_id: String,
    pub host_player_name: String,
    pub score_limit: i32,
}

/// One game instance: roster, rounds and score limit.
///
/// # Invariants
///
/// - Player ids are unique within the session
/// - Each round holds at most one score entry per player
/// - `game_status` only ever moves from false to true
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    game_id: GameId,
    host_id: PlayerId,
    game_status: bool,
    score_limit: i32,
    players: Vec<Player>,
    rounds: Vec<Round>,
}

impl GameSession {
    /// Create a session whose only player is the ready host.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the game id, host id or host name is blank
    pub fn create(request: CreateGame) -> Result<Self, GameError> {
        let game_id = GameId::new(request.game_id)?;
        let host_id = PlayerId::new(request.host_player_id)
            .map_err(|_| GameError::validation("host_player_id", "Host player ID is required"))?;
        if request.host_player_name.trim().is_empty() {
            return Err(GameError::validation(
                "host_player_name",
                "Host player name is required",
            ));
        }

        Ok(Self {
            game_id,
            host_id: host_id.clone(),
            game_status: false,
            score_limit: request.score_limit,
            players: vec![Player::host(host_id, request.host_player_name)],
            rounds: Vec::new(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn host_id(&self) -> &PlayerId {
        &self.host_id
    }

    /// True once the game has been started.
    pub fn is_started(&self) -> bool {
        self.game_status
    }

    /// Conventional end-of-game target; informational only.
    pub fn score_limit(&self) -> i32 {
        self.score_limit
    }

    /// Players in join order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Rounds in creation order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    pub fn has_player(&self, player_id: &PlayerId) -> bool {
        self.player(player_id).is_some()
    }

    pub fn round(&self, round_id: RoundId) -> Option<&Round> {
        self.rounds.iter().find(|r| r.id() == round_id)
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn all_ready(&self) -> bool {
        self.players.iter().all(Player::is_ready)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Roster
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a player to the roster. Late joins after start are allowed.
    ///
    /// The joining player's score always starts at zero.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the player id or name is blank
    /// - `PlayerAlreadyJoined` if the id is already on the roster
    pub fn join(&mut self, mut player: Player) -> Result<&Player, GameError> {
        if player.id().is_blank() {
            return Err(GameError::validation("id", "Player ID is required"));
        }
        if player.name().trim().is_empty() {
            return Err(GameError::validation("name", "Player name is required"));
        }
        if self.has_player(player.id()) {
            return Err(GameError::PlayerAlreadyJoined {
                game_id: self.game_id.clone(),
                player_id: player.id().clone(),
            });
        }

        player.reset_score();
        self.players.push(player);
        Ok(&self.players[self.players.len() - 1])
    }

    /// Remove a player, returning them.
    ///
    /// # Errors
    ///
    /// - `PlayerNotFound` if no player has that id
    pub fn remove_player(&mut self, player_id: &PlayerId) -> Result<Player, GameError> {
        let index = self.player_index(player_id)?;
        Ok(self.players.remove(index))
    }

    /// Flip a player's ready flag.
    pub fn toggle_ready(&mut self, player_id: &PlayerId) -> Result<&Player, GameError> {
        let index = self.player_index(player_id)?;
        let player = &mut self.players[index];
        player.toggle_ready();
        Ok(&*player)
    }

    /// Rename a player, returning the updated player.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the new name is blank
    /// - `PlayerNotFound` if no player has that id
    pub fn rename_player(
        &mut self,
        player_id: &PlayerId,
        name: String,
    ) -> Result<&Player, GameError> {
        if name.trim().is_empty() {
            return Err(GameError::validation("name", "Player name is required"));
        }
        let index = self.player_index(player_id)?;
        let player = &mut self.players[index];
        player.rename(name);
        Ok(&*player)
    }

    /// Start the game. Re-starting a started game succeeds without change.
    ///
    /// # Errors
    ///
    /// - `PlayersNotReady` if any player is not ready
    pub fn start(&mut self) -> Result<(), GameError> {
        if !self.all_ready() {
            return Err(GameError::PlayersNotReady);
        }
        self.game_status = true;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rounds
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a fresh round.
    pub fn add_round(&mut self) -> &Round {
        self.open_round(true)
    }

    /// Record a score in the latest round, opening one if none exists.
    ///
    /// A resubmission for the same player replaces the previous entry.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the player id is blank
    pub fn submit_score(&mut self, score: PlayerScore) -> Result<&Round, GameError> {
        if score.player_id.is_blank() {
            return Err(GameError::validation("player_id", "Player ID is required"));
        }
        let round = self.open_round(false);
        round.upsert_score(score);
        Ok(&*round)
    }

    /// Flag a player's entry in a round as done.
    ///
    /// # Errors
    ///
    /// - `RoundNotFound` if the round does not exist
    /// - `ScoreNotFound` if the player has not submitted in that round
    pub fn mark_player_done(
        &mut self,
        round_id: RoundId,
        player_id: &PlayerId,
    ) -> Result<&PlayerScore, GameError> {
        self.round_mut(round_id)?.mark_done(player_id)
    }

    /// True iff every current player has a done entry in the round.
    pub fn is_round_ready(&self, round_id: RoundId) -> Result<bool, GameError> {
        Ok(self.existing_round(round_id)?.all_done(&self.players))
    }

    /// Close a round and credit each player's submitted total.
    ///
    /// Entries of players who have since left are not credited.
    ///
    /// # Errors
    ///
    /// - `RoundNotFound` if the round does not exist
    /// - `RoundIncomplete` if some current player is not done
    /// - `RoundAlreadyCompleted` if the round was already closed
    pub fn complete_round(&mut self, round_id: RoundId) -> Result<&Round, GameError> {
        let round = self
            .rounds
            .iter_mut()
            .find(|r| r.id() == round_id)
            .ok_or(GameError::RoundNotFound(round_id))?;
        round.complete(&self.players)?;

        for entry in round.scores() {
            if let Some(player) = self.players.iter_mut().find(|p| p.id() == &entry.player_id) {
                player.credit(entry.score.total);
            }
        }
        Ok(&*round)
    }

    /// Per-player submission status for a round, in roster order.
    pub fn round_status(&self, round_id: RoundId) -> Result<Vec<PlayerRoundStatus>, GameError> {
        Ok(self.existing_round(round_id)?.status_for(&self.players))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// The round scores go to: a new one when `fresh` or when none exists,
    /// otherwise the most recently created.
    fn open_round(&mut self, fresh: bool) -> &mut Round {
        if fresh || self.rounds.is_empty() {
            self.rounds.push(Round::new());
        }
        let last = self.rounds.len() - 1;
        &mut self.rounds[last]
    }

    fn player_index(&self, player_id: &PlayerId) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.id() == player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.clone()))
    }

    fn existing_round(&self, round_id: RoundId) -> Result<&Round, GameError> {
        self.round(round_id).ok_or(GameError::RoundNotFound(round_id))
    }

    fn round_mut(&mut self, round_id: RoundId) -> Result<&mut Round, GameError> {
        self.rounds
            .iter_mut()
            .find(|r| r.id() == round_id)
            .ok_or(GameError::RoundNotFound(round_id))
    }
}
