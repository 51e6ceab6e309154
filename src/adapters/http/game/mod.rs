//! HTTP adapter for game endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateGameRequest, ErrorResponse, RoundReadyResponse, UpdatePlayerNameRequest};
pub use handlers::{GameApiError, GameAppState};
pub use routes::game_router;
