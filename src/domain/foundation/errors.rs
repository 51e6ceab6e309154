//! Error vocabulary shared by the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } => field,
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// The four ways an operation can fail, as seen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Missing or blank required field.
    InvalidInput,
    /// Identifier already taken.
    Conflict,
    /// Session, player, round or score entry absent.
    NotFound,
    /// Precondition of a transition not met.
    InvalidState,
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Conflict errors
    GameAlreadyExists,
    PlayerAlreadyJoined,

    // Not found errors
    GameNotFound,
    PlayerNotFound,
    RoundNotFound,
    ScoreNotFound,

    // State errors
    PlayersNotReady,
    RoundIncomplete,
    RoundAlreadyCompleted,
}

impl ErrorCode {
    /// Returns the caller-visible category for this code.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::ValidationFailed => ErrorCategory::InvalidInput,
            ErrorCode::GameAlreadyExists | ErrorCode::PlayerAlreadyJoined => {
                ErrorCategory::Conflict
            }
            ErrorCode::GameNotFound
            | ErrorCode::PlayerNotFound
            | ErrorCode::RoundNotFound
            | ErrorCode::ScoreNotFound => ErrorCategory::NotFound,
            ErrorCode::PlayersNotReady
            | ErrorCode::RoundIncomplete
            | ErrorCode::RoundAlreadyCompleted => ErrorCategory::InvalidState,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::GameAlreadyExists => "GAME_ALREADY_EXISTS",
            ErrorCode::PlayerAlreadyJoined => "PLAYER_ALREADY_JOINED",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::RoundNotFound => "ROUND_NOT_FOUND",
            ErrorCode::ScoreNotFound => "SCORE_NOT_FOUND",
            ErrorCode::PlayersNotReady => "PLAYERS_NOT_READY",
            ErrorCode::RoundIncomplete => "ROUND_INCOMPLETE",
            ErrorCode::RoundAlreadyCompleted => "ROUND_ALREADY_COMPLETED",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("game_id");
        assert_eq!(format!("{}", err), "Field 'game_id' cannot be empty");
        assert_eq!(err.field(), "game_id");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("round_id", "not a uuid");
        assert_eq!(
            format!("{}", err),
            "Field 'round_id' has invalid format: not a uuid"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::GameNotFound), "GAME_NOT_FOUND");
        assert_eq!(
            format!("{}", ErrorCode::RoundAlreadyCompleted),
            "ROUND_ALREADY_COMPLETED"
        );
    }

    #[test]
    fn error_codes_fall_into_expected_categories() {
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::InvalidInput);
        assert_eq!(ErrorCode::GameAlreadyExists.category(), ErrorCategory::Conflict);
        assert_eq!(ErrorCode::PlayerAlreadyJoined.category(), ErrorCategory::Conflict);
        assert_eq!(ErrorCode::ScoreNotFound.category(), ErrorCategory::NotFound);
        assert_eq!(ErrorCode::PlayersNotReady.category(), ErrorCategory::InvalidState);
        assert_eq!(ErrorCode::RoundIncomplete.category(), ErrorCategory::InvalidState);
    }
}
