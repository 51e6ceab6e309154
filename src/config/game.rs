//! Game rules configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::game::DEFAULT_SCORE_LIMIT;

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Score limit for sessions created without one
    #[serde(default = "default_score_limit")]
    pub default_score_limit: i32,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_score_limit <= 0 {
            return Err(ValidationError::InvalidScoreLimit);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_score_limit: default_score_limit(),
        }
    }
}

fn default_score_limit() -> i32 {
    DEFAULT_SCORE_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_score_limit_is_75() {
        assert_eq!(GameConfig::default().default_score_limit, 75);
    }

    #[test]
    fn non_positive_score_limit_is_rejected() {
        for limit in [0, -10] {
            let config = GameConfig {
                default_score_limit: limit,
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidScoreLimit));
        }
    }
}
