//! HTTP handlers for game endpoints.
//!
//! Handlers parse path identifiers, delegate to the session store and
//! serialize whatever it returns. No game rules live here.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{ErrorCategory, ErrorCode, GameId, PlayerId, RoundId};
use crate::domain::game::{GameError, Player, PlayerScore};
use crate::ports::GameSessionStore;

use super::dto::{CreateGameRequest, ErrorResponse, RoundReadyResponse, UpdatePlayerNameRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct GameAppState {
    pub store: Arc<dyn GameSessionStore>,
    /// Applied when a create request omits `scoreLimit`.
    pub default_score_limit: i32,
}

impl GameAppState {
    pub fn new(store: Arc<dyn GameSessionStore>, default_score_limit: i32) -> Self {
        Self {
            store,
            default_score_limit,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub enum GameApiError {
    Game(GameError),
    /// Path segment that cannot name any round.
    MalformedRoundId(String),
}

impl From<GameError> for GameApiError {
    fn from(error: GameError) -> Self {
        GameApiError::Game(error)
    }
}

impl IntoResponse for GameApiError {
    fn into_response(self) -> Response {
        match self {
            GameApiError::Game(error) => handle_game_error(error),
            GameApiError::MalformedRoundId(raw) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(
                    ErrorCode::RoundNotFound,
                    format!("Round not found: {}", raw),
                )),
            )
                .into_response(),
        }
    }
}

fn status_for(category: ErrorCategory) -> StatusCode {
    match category {
        ErrorCategory::InvalidInput | ErrorCategory::InvalidState => StatusCode::BAD_REQUEST,
        ErrorCategory::Conflict => StatusCode::CONFLICT,
        ErrorCategory::NotFound => StatusCode::NOT_FOUND,
    }
}

fn handle_game_error(error: GameError) -> Response {
    let status = status_for(error.category());
    (status, Json(ErrorResponse::from(&error))).into_response()
}

fn parse_game_id(raw: String) -> Result<GameId, GameApiError> {
    Ok(GameId::new(raw).map_err(GameError::from)?)
}

fn parse_player_id(raw: String) -> Result<PlayerId, GameApiError> {
    Ok(PlayerId::new(raw).map_err(GameError::from)?)
}

fn parse_round_id(raw: String) -> Result<RoundId, GameApiError> {
    raw.parse().map_err(|_| GameApiError::MalformedRoundId(raw))
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/game/create
pub async fn create_game(
    State(state): State<GameAppState>,
    Json(req): Json<CreateGameRequest>,
) -> Result<impl IntoResponse, GameApiError> {
    let session = state
        .store
        .create_session(req.into_command(state.default_score_limit))
        .await?;
    Ok(Json(session))
}

/// DELETE /api/game/delete/:game_id
pub async fn delete_game(
    State(state): State<GameAppState>,
    Path(game_id): Path<String>,
) -> Result<impl IntoResponse, GameApiError> {
    let game_id = parse_game_id(game_id)?;
    Ok(Json(state.store.delete_session(&game_id).await?))
}

/// POST /api/game/join/:game_id
pub async fn join_game(
    State(state): State<GameAppState>,
    Path(game_id): Path<String>,
    Json(player): Json<Player>,
) -> Result<impl IntoResponse, GameApiError> {
    let game_id = parse_game_id(game_id)?;
    Ok(Json(state.store.join_session(&game_id, player).await?))
}

/// DELETE /api/game/delete-player/:game_id/:player_id
pub async fn remove_player(
    State(state): State<GameAppState>,
    Path((game_id, player_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, GameApiError> {
    let game_id = parse_game_id(game_id)?;
    let player_id = parse_player_id(player_id)?;
    Ok(Json(state.store.leave_session(&game_id, &player_id).await?))
}

/// POST /api/game/toggle-ready/:game_id/:player_id
pub async fn toggle_ready(
    State(state): State<GameAppState>,
    Path((game_id, player_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, GameApiError> {
    let game_id = parse_game_id(game_id)?;
    let player_id = parse_player_id(player_id)?;
    Ok(Json(state.store.toggle_ready(&game_id, &player_id).await?))
}

/// POST /api/game/start/:game_id
pub async fn start_game(
    State(state): State<GameAppState>,
    Path(game_id): Path<String>,
) -> Result<impl IntoResponse, GameApiError> {
    let game_id = parse_game_id(game_id)?;
    Ok(Json(state.store.start_game(&game_id).await?))
}

/// POST /api/game/add-round/:game_id
pub async fn add_round(
    State(state): State<GameAppState>,
    Path(game_id): Path<String>,
) -> Result<impl IntoResponse, GameApiError> {
    let game_id = parse_game_id(game_id)?;
    Ok(Json(state.store.add_round(&game_id).await?))
}

/// POST /api/game/submit-score/:game_id
pub async fn submit_score(
    State(state): State<GameAppState>,
    Path(game_id): Path<String>,
    Json(score): Json<PlayerScore>,
) -> Result<impl IntoResponse, GameApiError> {
    let game_id = parse_game_id(game_id)?;
    Ok(Json(state.store.submit_score(&game_id, score).await?))
}

/// POST /api/game/round-done/:game_id/:round_id/:player_id
pub async fn mark_player_done(
    State(state): State<GameAppState>,
    Path((game_id, round_id, player_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, GameApiError> {
    let game_id = parse_game_id(game_id)?;
    let round_id = parse_round_id(round_id)?;
    let player_id = parse_player_id(player_id)?;
    Ok(Json(
        state
            .store
            .mark_player_done(&game_id, round_id, &player_id)
            .await?,
    ))
}

/// GET /api/game/round-ready/:game_id/:round_id
pub async fn round_ready(
    State(state): State<GameAppState>,
    Path((game_id, round_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, GameApiError> {
    let game_id = parse_game_id(game_id)?;
    let round_id = parse_round_id(round_id)?;
    let all_done = state.store.is_round_ready(&game_id, round_id).await?;
    Ok(Json(RoundReadyResponse { all_done }))
}

/// POST /api/game/complete-round/:game_id/:round_id
pub async fn complete_round(
    State(state): State<GameAppState>,
    Path((game_id, round_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, GameApiError> {
    let game_id = parse_game_id(game_id)?;
    let round_id = parse_round_id(round_id)?;
    Ok(Json(state.store.complete_round(&game_id, round_id).await?))
}

/// GET /api/game/round-status/:game_id/:round_id
pub async fn round_status(
    State(state): State<GameAppState>,
    Path((game_id, round_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, GameApiError> {
    let game_id = parse_game_id(game_id)?;
    let round_id = parse_round_id(round_id)?;
    Ok(Json(state.store.round_status(&game_id, round_id).await?))
}

/// PATCH /api/game/update-name - Responds with the new name
pub async fn update_player_name(
    State(state): State<GameAppState>,
    Json(req): Json<UpdatePlayerNameRequest>,
) -> Result<impl IntoResponse, GameApiError> {
    let player_id = parse_player_id(req.id)?;
    let player = state.store.update_player_name(&player_id, req.name).await?;
    Ok(Json(player.name().to_string()))
}

/// GET /api/game/:game_id
pub async fn get_game(
    State(state): State<GameAppState>,
    Path(game_id): Path<String>,
) -> Result<impl IntoResponse, GameApiError> {
    let game_id = parse_game_id(game_id)?;
    Ok(Json(state.store.get_session(&game_id).await?))
}

/// GET /api/game/GetAllGames
pub async fn list_games(State(state): State<GameAppState>) -> impl IntoResponse {
    Json(state.store.list_sessions().await)
}
