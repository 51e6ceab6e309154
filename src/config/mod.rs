//! Service configuration, read from the environment.
//!
//! Every value has a default, so the service starts with an empty
//! environment.
//!
//! # Example
//!
//! ```no_run
//! use dutch_blitz::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod game;
mod server;

pub use error::{ConfigError, ValidationError};
pub use game::GameConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Game rules
    #[serde(default)]
    pub game: GameConfig,
}

impl AppConfig {
    /// Read `.env` (if any) and `DUTCH_BLITZ__*` variables.
    ///
    /// `DUTCH_BLITZ__SERVER__PORT=5000` sets `server.port`,
    /// `DUTCH_BLITZ__GAME__DEFAULT_SCORE_LIMIT=100` sets
    /// `game.default_score_limit`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DUTCH_BLITZ")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic checks that deserialization cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.game.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
