//! Request and response DTOs for game endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;
use crate::domain::game::{CreateGame, GameError};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/game/create`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub host_player_id: String,
    #[serde(default)]
    pub host_player_name: String,
    pub score_limit: Option<i32>,
}

impl CreateGameRequest {
    /// Fill in the configured score limit when the caller left it out.
    pub fn into_command(self, default_score_limit: i32) -> CreateGame {
        CreateGame {
            game_id: self.game_id,
            host_player_id: self.host_player_id,
            host_player_name: self.host_player_name,
            score_limit: self.score_limit.unwrap_or(default_score_limit),
        }
    }
}

/// Body of `PATCH /api/game/update-name`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePlayerNameRequest {
    pub id: String,
    pub name: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundReadyResponse {
    pub all_done: bool,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

impl From<&GameError> for ErrorResponse {
    fn from(error: &GameError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}
