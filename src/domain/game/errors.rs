//! Game-specific error types.

use thiserror::Error;

use crate::domain::foundation::{
    ErrorCategory, ErrorCode, GameId, PlayerId, RoundId, ValidationError,
};

/// Errors raised by game session operations.
///
/// A failed operation never leaves a session partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Validation failed for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    #[error("Game already exists: {0}")]
    GameAlreadyExists(GameId),

    #[error("Player {player_id} already joined game {game_id}")]
    PlayerAlreadyJoined { game_id: GameId, player_id: PlayerId },

    #[error("Game not found: {0}")]
    GameNotFound(GameId),

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Round not found: {0}")]
    RoundNotFound(RoundId),

    #[error("No score submitted by player {player_id} in round {round_id}")]
    ScoreNotFound { round_id: RoundId, player_id: PlayerId },

    #[error("Not all players are ready")]
    PlayersNotReady,

    #[error("Not all players have completed round {0}")]
    RoundIncomplete(RoundId),

    #[error("Round {0} has already been completed")]
    RoundAlreadyCompleted(RoundId),
}

impl GameError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        GameError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::InvalidInput { .. } => ErrorCode::ValidationFailed,
            GameError::GameAlreadyExists(_) => ErrorCode::GameAlreadyExists,
            GameError::PlayerAlreadyJoined { .. } => ErrorCode::PlayerAlreadyJoined,
            GameError::GameNotFound(_) => ErrorCode::GameNotFound,
            GameError::PlayerNotFound(_) => ErrorCode::PlayerNotFound,
            GameError::RoundNotFound(_) => ErrorCode::RoundNotFound,
            GameError::ScoreNotFound { .. } => ErrorCode::ScoreNotFound,
            GameError::PlayersNotReady => ErrorCode::PlayersNotReady,
            GameError::RoundIncomplete(_) => ErrorCode::RoundIncomplete,
            GameError::RoundAlreadyCompleted(_) => ErrorCode::RoundAlreadyCompleted,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }
}

impl From<ValidationError> for GameError {
    fn from(err: ValidationError) -> Self {
        GameError::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
