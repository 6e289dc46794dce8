//! Client configuration.
//!
//! Consolidates every environment variable read and produces a validated
//! [`ClientConfig`]. Explicit overrides (from CLI args) win over the
//! environment, which wins over the built-in defaults.

use crate::round::ladder::{BetLadder, DEFAULT_BET_LEVELS, LadderError};
use crate::session::{
    DEFAULT_CURRENCY, DEFAULT_LANGUAGE, DEFAULT_MODE, DEFAULT_RGS_URL, DEFAULT_SESSION_ID,
    Session,
};

/// Complete client configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Session identity sent with every wallet call
    pub session: Session,
    /// Bet ladder used until the server supplies one
    pub fallback_bet_levels: Vec<i64>,
    /// Initial index into the fallback ladder
    pub default_bet_index: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            session: Session::default(),
            fallback_bet_levels: DEFAULT_BET_LEVELS.to_vec(),
            default_bet_index: 0,
        }
    }
}

/// Values given on the command line, each taking precedence over the environment.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub rgs_url: Option<String>,
    pub session_id: Option<String>,
    pub language: Option<String>,
    pub currency: Option<String>,
    pub mode: Option<String>,
}

impl ClientConfig {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns error if a variable is present but malformed
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns error if `BET_LEVELS` or `DEFAULT_BET_INDEX` cannot be parsed,
    /// or the resulting configuration fails [`ClientConfig::validate`]
    pub fn from_lookup<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |value: Option<String>, var: &str, default: &str| {
            value
                .or_else(|| lookup(var))
                .unwrap_or_else(|| default.to_string())
        };

        let session = Session {
            session_id: pick(overrides.session_id, "SESSION_ID", DEFAULT_SESSION_ID),
            rgs_base_url: pick(overrides.rgs_url, "RGS_URL", DEFAULT_RGS_URL),
            language: pick(overrides.language, "LANGUAGE", DEFAULT_LANGUAGE),
            currency: pick(overrides.currency, "CURRENCY", DEFAULT_CURRENCY),
            mode: pick(overrides.mode, "GAME_MODE", DEFAULT_MODE),
        };

        let fallback_bet_levels = match lookup("BET_LEVELS") {
            Some(raw) => parse_levels(&raw)?,
            None => DEFAULT_BET_LEVELS.to_vec(),
        };

        let default_bet_index = match lookup("DEFAULT_BET_INDEX") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| ConfigError::Invalid {
                var: "DEFAULT_BET_INDEX".to_string(),
                reason: format!("'{raw}' is not a non-negative integer"),
            })?,
            None => 0,
        };

        let config = Self {
            session,
            fallback_bet_levels,
            default_bet_index,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    ///
    /// # Errors
    ///
    /// Returns error if the session id or RGS url is blank, the url has no
    /// http(s) scheme, or the fallback ladder is not a valid ladder
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.session_id.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "SESSION_ID".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        let url = self.session.rgs_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: "RGS_URL".to_string(),
                reason: format!("'{url}' must start with http:// or https://"),
            });
        }

        self.fallback_ladder()
            .map(|_| ())
            .map_err(|e| ConfigError::Invalid {
                var: "BET_LEVELS".to_string(),
                reason: e.to_string(),
            })
    }

    /// Ladder built from the fallback levels and default index
    ///
    /// # Errors
    ///
    /// Returns error if the fallback levels are empty or not strictly increasing
    pub fn fallback_ladder(&self) -> Result<BetLadder, LadderError> {
        BetLadder::new(&self.fallback_bet_levels, self.default_bet_index)
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Parse a comma separated list of minor-unit amounts
fn parse_levels(raw: &str) -> Result<Vec<i64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>().map_err(|_| ConfigError::Invalid {
                var: "BET_LEVELS".to_string(),
                reason: format!("'{s}' is not an integer amount"),
            })
        })
        .collect()
}
