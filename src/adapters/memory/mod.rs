//! In-memory adapters.

mod in_memory_game_session_store;

pub use in_memory_game_session_store::InMemoryGameSessionStore;
