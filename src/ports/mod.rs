//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `GameSessionStore` - Live registry of game sessions and their operations

mod game_session_store;

pub use game_session_store::GameSessionStore;
