//! Route configuration for game endpoints.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use super::handlers::{
    add_round, complete_round, create_game, delete_game, get_game, join_game, list_games,
    mark_player_done, remove_player, round_ready, round_status, start_game, submit_score,
    toggle_ready, update_player_name, GameAppState,
};

/// Creates the game router. Mounted under `/api/game`.
///
/// Routes:
/// - `POST /create` - Create a session
/// - `DELETE /delete/:game_id` - Delete a session
/// - `POST /join/:game_id` - Join a session
/// - `DELETE /delete-player/:game_id/:player_id` - Leave a session
/// - `POST /toggle-ready/:game_id/:player_id` - Flip a ready flag
/// - `POST /start/:game_id` - Start the game
/// - `POST /add-round/:game_id` - Open a new round
/// - `POST /submit-score/:game_id` - Record a score in the latest round
/// - `POST /round-done/:game_id/:round_id/:player_id` - Mark a score final
/// - `GET /round-ready/:game_id/:round_id` - Check round readiness
/// - `POST /complete-round/:game_id/:round_id` - Credit round totals
/// - `GET /round-status/:game_id/:round_id` - Per-player round progress
/// - `PATCH /update-name` - Rename a player
/// - `GET /GetAllGames` - List sessions
/// - `GET /:game_id` - Fetch a session
pub fn game_router() -> Router<GameAppState> {
    Router::new()
        .route("/create", post(create_game))
        .route("/delete/:game_id", delete(delete_game))
        .route("/join/:game_id", post(join_game))
        .route("/delete-player/:game_id/:player_id", delete(remove_player))
        .route("/toggle-ready/:game_id/:player_id", post(toggle_ready))
        .route("/start/:game_id", post(start_game))
        .route("/add-round/:game_id", post(add_round))
        .route("/submit-score/:game_id", post(submit_score))
        .route(
            "/round-done/:game_id/:round_id/:player_id",
            post(mark_player_done),
        )
        .route("/round-ready/:game_id/:round_id", get(round_ready))
        .route("/complete-round/:game_id/:round_id", post(complete_round))
        .route("/round-status/:game_id/:round_id", get(round_status))
        .route("/update-name", patch(update_player_name))
        .route("/GetAllGames", get(list_games))
        .route("/:game_id", get(get_game))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryGameSessionStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = GameAppState::new(Arc::new(InMemoryGameSessionStore::new()), 75);
        Router::new().nest("/api/game", game_router()).with_state(state)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn create(app: &Router, body: Value) -> (StatusCode, Value) {
        send(app, "POST", "/api/game/create", Some(body)).await
    }

    #[tokio::test]
    async fn create_applies_default_score_limit() {
        let app = app();
        let (status, body) = create(
            &app,
            json!({"gameId": "G1", "hostPlayerId": "P1", "hostPlayerName": "Alice"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["gameId"], "G1");
        assert_eq!(body["scoreLimit"], 75);
        assert_eq!(body["gameStatus"], false);
        assert_eq!(body["players"][0]["isReady"], true);
    }

    #[tokio::test]
    async fn duplicate_create_is_conflict() {
        let app = app();
        let req = json!({"gameId": "G1", "hostPlayerId": "P1", "hostPlayerName": "Alice"});
        create(&app, req.clone()).await;
        let (status, body) = create(&app, req).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "GAME_ALREADY_EXISTS");
    }

    #[tokio::test]
    async fn blank_host_name_is_bad_request() {
        let app = app();
        let (status, body) = create(
            &app,
            json!({"gameId": "G1", "hostPlayerId": "P1", "hostPlayerName": ""}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let app = app();
        let (status, body) = send(&app, "GET", "/api/game/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "GAME_NOT_FOUND");
    }

    #[tokio::test]
    async fn start_with_unready_player_is_bad_request() {
        let app = app();
        create(
            &app,
            json!({"gameId": "G1", "hostPlayerId": "P1", "hostPlayerName": "Alice"}),
        )
        .await;
        send(
            &app,
            "POST",
            "/api/game/join/G1",
            Some(json!({"id": "P2", "name": "Bob"})),
        )
        .await;

        let (status, body) = send(&app, "POST", "/api/game/start/G1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "PLAYERS_NOT_READY");
    }

    #[tokio::test]
    async fn malformed_round_id_is_not_found() {
        let app = app();
        create(
            &app,
            json!({"gameId": "G1", "hostPlayerId": "P1", "hostPlayerName": "Alice"}),
        )
        .await;

        let (status, body) = send(&app, "GET", "/api/game/round-ready/G1/not-a-round", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "ROUND_NOT_FOUND");
    }

    #[tokio::test]
    async fn update_name_returns_new_name() {
        let app = app();
        create(
            &app,
            json!({"gameId": "G1", "hostPlayerId": "P1", "hostPlayerName": "Alice"}),
        )
        .await;

        let (status, body) = send(
            &app,
            "PATCH",
            "/api/game/update-name",
            Some(json!({"id": "P1", "name": "Alicia"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("Alicia"));
    }

    #[tokio::test]
    async fn list_games_is_ordered() {
        let app = app();
        for id in ["G2", "G1"] {
            create(
                &app,
                json!({"gameId": id, "hostPlayerId": "P1", "hostPlayerName": "Alice"}),
            )
            .await;
        }

        let (status, body) = send(&app, "GET", "/api/game/GetAllGames", None).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["gameId"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["G1", "G2"]);
    }
}
