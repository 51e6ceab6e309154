//! Game domain module.
//!
//! Sessions, their player roster and the per-round scorekeeping rules.
//! Card play itself is not modelled; only the scores players report.

mod errors;
mod player;
mod round;
mod score;
mod session;

pub use errors::GameError;
pub use player::Player;
pub use round::{Round, RoundPhase};
pub use score::{PlayerRoundStatus, PlayerScore, RoundScore};
pub use session::{CreateGame, GameSession, DEFAULT_SCORE_LIMIT};
