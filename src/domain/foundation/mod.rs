//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, the state machine trait and error codes
//! that form the vocabulary of the scorekeeping domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCategory, ErrorCode, ValidationError};
pub use ids::{GameId, PlayerId, RoundId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
