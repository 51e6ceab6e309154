//! In-Memory Game Session Store
//!
//! Holds every live session for the life of the process. Nothing is
//! persisted; the registry starts empty and is dropped at exit.
//!
//! # Locking
//!
//! The registry map sits behind a `RwLock` and each session behind its own
//! `Mutex`. Map guards are always released before a session lock is taken,
//! and removal from the map happens while the session lock is held, so the
//! only nesting is session → map.
//!
//! A session removed from the map is flagged as retired under its lock.
//! Callers that fetched its handle before the removal see `GameNotFound`
//! once they acquire the lock.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::domain::foundation::{GameId, PlayerId, RoundId};
use crate::domain::game::{
    CreateGame, GameError, GameSession, Player, PlayerRoundStatus, PlayerScore, Round,
};
use crate::ports::GameSessionStore;

#[derive(Debug)]
struct SessionSlot {
    session: GameSession,
    retired: bool,
}

type SessionHandle = Arc<Mutex<SessionSlot>>;

/// Process-wide registry of game sessions.
#[derive(Debug, Default)]
pub struct InMemoryGameSessionStore {
    sessions: RwLock<HashMap<GameId, SessionHandle>>,
}

impl InMemoryGameSessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn handle(&self, game_id: &GameId) -> Result<SessionHandle, GameError> {
        self.sessions
            .read()
            .await
            .get(game_id)
            .cloned()
            .ok_or_else(|| GameError::GameNotFound(game_id.clone()))
    }

    /// Handles of every live session, ordered by game id.
    async fn snapshot(&self) -> Vec<(GameId, SessionHandle)> {
        let mut handles: Vec<(GameId, SessionHandle)> = self
            .sessions
            .read()
            .await
            .iter()
            .map(|(id, handle)| (id.clone(), Arc::clone(handle)))
            .collect();
        handles.sort_by(|a, b| a.0.cmp(&b.0));
        handles
    }

    /// Run `op` against a live session while holding its lock.
    async fn with_session<T, F>(&self, game_id: &GameId, op: F) -> Result<T, GameError>
    where
        F: FnOnce(&mut GameSession) -> Result<T, GameError> + Send,
    {
        let handle = self.handle(game_id).await?;
        let mut slot = handle.lock().await;
        if slot.retired {
            return Err(GameError::GameNotFound(game_id.clone()));
        }
        op(&mut slot.session)
    }

    /// Drop a session from the map. Caller must hold the session's lock.
    async fn unregister(&self, game_id: &GameId, handle: &SessionHandle) {
        let mut sessions = self.sessions.write().await;
        if sessions
            .get(game_id)
            .is_some_and(|current| Arc::ptr_eq(current, handle))
        {
            sessions.remove(game_id);
        }
    }
}

#[async_trait]
impl GameSessionStore for InMemoryGameSessionStore {
    async fn create_session(&self, request: CreateGame) -> Result<GameSession, GameError> {
        let session = GameSession::create(request)?;
        let game_id = session.game_id().clone();

        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&game_id) {
            return Err(GameError::GameAlreadyExists(game_id));
        }
        sessions.insert(
            game_id.clone(),
            Arc::new(Mutex::new(SessionSlot {
                session: session.clone(),
                retired: false,
            })),
        );

        info!(
            game_id = %game_id,
            host_id = %session.host_id(),
            score_limit = session.score_limit(),
            "Game created"
        );
        Ok(session)
    }

    async fn delete_session(&self, game_id: &GameId) -> Result<GameSession, GameError> {
        let handle = self.handle(game_id).await?;
        let mut slot = handle.lock().await;
        if slot.retired {
            return Err(GameError::GameNotFound(game_id.clone()));
        }
        slot.retired = true;
        self.unregister(game_id, &handle).await;

        info!(game_id = %game_id, "Game deleted");
        Ok(slot.session.clone())
    }

    async fn join_session(&self, game_id: &GameId, player: Player) -> Result<Player, GameError> {
        let player = self
            .with_session(game_id, |s| s.join(player).cloned())
            .await?;
        debug!(game_id = %game_id, player_id = %player.id(), "Player joined");
        Ok(player)
    }

    async fn leave_session(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> Result<GameSession, GameError> {
        let handle = self.handle(game_id).await?;
        let mut slot = handle.lock().await;
        if slot.retired {
            return Err(GameError::GameNotFound(game_id.clone()));
        }
        slot.session.remove_player(player_id)?;
        debug!(game_id = %game_id, player_id = %player_id, "Player left");

        if slot.session.is_empty() {
            slot.retired = true;
            self.unregister(game_id, &handle).await;
            info!(game_id = %game_id, "Last player left, game closed");
        }
        Ok(slot.session.clone())
    }

    async fn toggle_ready(
        &self,
        game_id: &GameId,
        player_id: &PlayerId,
    ) -> Result<Player, GameError> {
        let player = self
            .with_session(game_id, |s| s.toggle_ready(player_id).cloned())
            .await?;
        debug!(
            game_id = %game_id,
            player_id = %player_id,
            is_ready = player.is_ready(),
            "Ready toggled"
        );
        Ok(player)
    }

    async fn start_game(&self, game_id: &GameId) -> Result<GameSession, GameError> {
        let session = self
            .with_session(game_id, |s| {
                s.start()?;
                Ok(s.clone())
            })
            .await?;
        info!(game_id = %game_id, players = session.players().len(), "Game started");
        Ok(session)
    }

    async fn add_round(&self, game_id: &GameId) -> Result<Round, GameError> {
        let round = self
            .with_session(game_id, |s| Ok(s.add_round().clone()))
            .await?;
        debug!(game_id = %game_id, round_id = %round.id(), "Round added");
        Ok(round)
    }

    async fn submit_score(
        &self,
        game_id: &GameId,
        score: PlayerScore,
    ) -> Result<Round, GameError> {
        let player_id = score.player_id.clone();
        let round = self
            .with_session(game_id, |s| s.submit_score(score).cloned())
            .await?;
        debug!(
            game_id = %game_id,
            round_id = %round.id(),
            player_id = %player_id,
            "Score submitted"
        );
        Ok(round)
    }

    async fn mark_player_done(
        &self,
        game_id: &GameId,
        round_id: RoundId,
        player_id: &PlayerId,
    ) -> Result<PlayerScore, GameError> {
        self.with_session(game_id, |s| s.mark_player_done(round_id, player_id).cloned())
            .await
    }

    async fn is_round_ready(
        &self,
        game_id: &GameId,
        round_id: RoundId,
    ) -> Result<bool, GameError> {
        self.with_session(game_id, |s| s.is_round_ready(round_id))
            .await
    }

    async fn complete_round(
        &self,
        game_id: &GameId,
        round_id: RoundId,
    ) -> Result<Round, GameError> {
        let round = self
            .with_session(game_id, |s| s.complete_round(round_id).cloned())
            .await?;
        info!(
            game_id = %game_id,
            round_id = %round_id,
            entries = round.scores().len(),
            "Round completed"
        );
        Ok(round)
    }

    async fn round_status(
        &self,
        game_id: &GameId,
        round_id: RoundId,
    ) -> Result<Vec<PlayerRoundStatus>, GameError> {
        self.with_session(game_id, |s| s.round_status(round_id))
            .await
    }

    async fn update_player_name(
        &self,
        player_id: &PlayerId,
        name: String,
    ) -> Result<Player, GameError> {
        if name.trim().is_empty() {
            return Err(GameError::validation("name", "Player name is required"));
        }

        for (game_id, handle) in self.snapshot().await {
            let mut slot = handle.lock().await;
            if slot.retired || !slot.session.has_player(player_id) {
                continue;
            }
            let player = slot.session.rename_player(player_id, name)?.clone();
            debug!(game_id = %game_id, player_id = %player_id, "Player renamed");
            return Ok(player);
        }
        Err(GameError::PlayerNotFound(player_id.clone()))
    }

    async fn get_session(&self, game_id: &GameId) -> Result<GameSession, GameError> {
        self.with_session(game_id, |s| Ok(s.clone())).await
    }

    async fn list_sessions(&self) -> Vec<GameSession> {
        let mut sessions = Vec::new();
        // One session lock at a time, released before the next is taken.
        for (_, handle) in self.snapshot().await {
            let slot = handle.lock().await;
            if !slot.retired {
                sessions.push(slot.session.clone());
            }
        }
        sessions
    }
}
