//! Game session store port.
//!
//! Defines the operation set that transports invoke against the live
//! session registry. Every operation targeting a session is atomic with
//! respect to other operations on that same session.
//!
//! # Design
//!
//! - **Snapshot results**: returned entities are copies taken while the
//!   session was locked
//! - **No partial writes**: a failed operation leaves the session unchanged

use crate::domain::foundation::{GameId, PlayerId, RoundId};
use crate::domain::game::{
    CreateGame, GameError, GameSession, Player, PlayerRoundStatus, PlayerScore, Round,
};
use async_trait::async_trait;

/// Registry of active game sessions keyed by caller-supplied game id.
#[async_trait]
pub trait GameSessionStore: Send + Sync {
    /// Register a new session with the host as its only, ready, player.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the game id, host id or host name is blank
    /// - `GameAlreadyExists` if the game id is taken
    async fn create_session(&self, request: CreateGame) -> Result<GameSession, GameError>;

    /// Remove a session, returning its final state.
    async fn delete_session(&self, game_id: &GameId) -> Result<GameSession, GameError>;

    /// Add a player to a session.
    ///
    /// # Errors
    ///
    /// - `PlayerAlreadyJoined` if the id is already on the roster
    async fn join_session(&self, game_id: &GameId, player: Player) -> Result<Player, GameError>;

    /// Remove a player. Removing the last player deletes the session.
    ///
    /// Returns the session as it stands after the removal.
    async fn leave_session(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> Result<GameSession, GameError>;

    /// Flip a player's ready flag.
    async fn toggle_ready(&self, game_id: &GameId, player_id: &PlayerId)
        -> Result<Player, GameError>;

    /// Start the game if every player is ready.
    async fn start_game(&self, game_id: &GameId) -> Result<GameSession, GameError>;

    /// Append a fresh round.
    async fn add_round(&self, game_id: &GameId) -> Result<Round, GameError>;

    /// Record a score in the latest round, opening one if none exists.
    async fn submit_score(&self, game_id: &GameId, score: PlayerScore)
        -> Result<Round, GameError>;

    /// Flag a submitted score as final.
    async fn mark_player_done(
        &self,
        game_id: &GameId,
        round_id: RoundId,
        player_id: &PlayerId,
    ) -> Result<PlayerScore, GameError>;

    /// True iff every current player has a done entry in the round.
    async fn is_round_ready(&self, game_id: &GameId, round_id: RoundId)
        -> Result<bool, GameError>;

    /// Close a round and credit each player's total.
    async fn complete_round(&self, game_id: &GameId, round_id: RoundId)
        -> Result<Round, GameError>;

    /// Per-player progress for a round.
    async fn round_status(
        &self,
        game_id: &GameId,
        round_id: RoundId,
    ) -> Result<Vec<PlayerRoundStatus>, GameError>;

    /// Rename a player in whichever session holds them.
    ///
    /// When several sessions hold the id, the one with the smallest game id
    /// is updated.
    async fn update_player_name(
        &self,
        player_id: &PlayerId,
        name: String,
    ) -> Result<Player, GameError>;

    /// Fetch one session.
    async fn get_session(&self, game_id: &GameId) -> Result<GameSession, GameError>;

    /// All live sessions ordered by game id.
    async fn list_sessions(&self) -> Vec<GameSession>;
}
