//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - Process-local session registry
//! - `http` - REST transport over the session store

pub mod http;
pub mod memory;

pub use memory::InMemoryGameSessionStore;
