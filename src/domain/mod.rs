//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, state machine, error codes)
//! - `game` - Game sessions, rosters, rounds and scoring

pub mod foundation;
pub mod game;
