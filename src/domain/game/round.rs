//! Round entity and its lifecycle.
//!
//! A round collects at most one score entry per player. Its phase is derived
//! from the current roster:
//!
//! ```text
//! Open ──(every player submitted and done)──► AllSubmitted ──(complete)──► Done
//!   ▲                                              │
//!   └──────────(a new player joins)────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PlayerId, RoundId, StateMachine, Timestamp};

use super::{GameError, Player, PlayerRoundStatus, PlayerScore};

/// Lifecycle phase of a round relative to the current roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// At least one player has not submitted or is not done.
    Open,
    /// Every current player has a done entry; totals not yet credited.
    AllSubmitted,
    /// Totals credited. Terminal.
    Done,
}

impl StateMachine for RoundPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RoundPhase::*;
        matches!(
            (self, target),
            (Open, AllSubmitted) | (AllSubmitted, Open) | (AllSubmitted, Done)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RoundPhase::*;
        match self {
            Open => vec![AllSubmitted],
            AllSubmitted => vec![Open, Done],
            Done => vec![],
        }
    }
}

/// One scoring cycle within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    id: RoundId,
    created_at: Timestamp,
    is_round_done: bool,
    scores: Vec<PlayerScore>,
}

impl Round {
    pub fn new() -> Self {
        Self {
            id: RoundId::new(),
            created_at: Timestamp::now(),
            is_round_done: false,
            scores: Vec::new(),
        }
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn is_round_done(&self) -> bool {
        self.is_round_done
    }

    /// Score entries in submission order.
    pub fn scores(&self) -> &[PlayerScore] {
        &self.scores
    }

    pub fn score_for(&self, player_id: &PlayerId) -> Option<&PlayerScore> {
        self.scores.iter().find(|s| &s.player_id == player_id)
    }

    /// True iff every listed player has a done entry in this round.
    pub fn all_done(&self, players: &[Player]) -> bool {
        players
            .iter()
            .all(|p| self.score_for(p.id()).is_some_and(|s| s.is_done))
    }

    pub fn phase(&self, players: &[Player]) -> RoundPhase {
        if self.is_round_done {
            RoundPhase::Done
        } else if self.all_done(players) {
            RoundPhase::AllSubmitted
        } else {
            RoundPhase::Open
        }
    }

    /// Status line for each listed player, in roster order.
    pub fn status_for(&self, players: &[Player]) -> Vec<PlayerRoundStatus> {
        players
            .iter()
            .map(|p| {
                let entry = self.score_for(p.id());
                PlayerRoundStatus {
                    player_id: p.id().clone(),
                    player_name: p.name().to_string(),
                    submitted: entry.is_some(),
                    is_done: entry.is_some_and(|s| s.is_done),
                    total: entry.map(|s| s.score.total).unwrap_or(0),
                }
            })
            .collect()
    }

    /// Replaces any existing entry for the same player. Other entries keep
    /// their relative order; the new entry goes last.
    pub(crate) fn upsert_score(&mut self, score: PlayerScore) {
        self.scores.retain(|s| s.player_id != score.player_id);
        self.scores.push(score);
    }

    pub(crate) fn mark_done(&mut self, player_id: &PlayerId) -> Result<&PlayerScore, GameError> {
        let round_id = self.id;
        let entry = self
            .scores
            .iter_mut()
            .find(|s| &s.player_id == player_id)
            .ok_or_else(|| GameError::ScoreNotFound {
                round_id,
                player_id: player_id.clone(),
            })?;
        entry.is_done = true;
        Ok(&*entry)
    }

    /// Moves the round to `Done`. Crediting totals is the session's job.
    pub(crate) fn complete(&mut self, players: &[Player]) -> Result<(), GameError> {
        match self.phase(players) {
            RoundPhase::Done => Err(GameError::RoundAlreadyCompleted(self.id)),
            phase => {
                phase
                    .transition_to(RoundPhase::Done)
                    .map_err(|_| GameError::RoundIncomplete(self.id))?;
                self.is_round_done = true;
                Ok(())
            }
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
