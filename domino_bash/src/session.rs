//! Player session identity used on every wallet call.

use serde::{Deserialize, Serialize};

pub const DEFAULT_RGS_URL: &str = "https://api.example.com";
pub const DEFAULT_SESSION_ID: &str = "dev-session";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_MODE: &str = "BASE";

/// Immutable session settings, built once at startup.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Session {
    pub session_id: String,
    pub rgs_base_url: String,
    pub language: String,
    pub currency: String,
    pub mode: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            session_id: DEFAULT_SESSION_ID.to_string(),
            rgs_base_url: DEFAULT_RGS_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            mode: DEFAULT_MODE.to_string(),
        }
    }
}

impl Session {
    #[must_use]
    pub fn new(session_id: impl Into<String>, rgs_base_url: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            rgs_base_url: rgs_base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }
}

/// Language sent to the RGS; blank falls back to `en`.
#[must_use]
pub fn effective_language(language: &str) -> &str {
    if language.trim().is_empty() {
        DEFAULT_LANGUAGE
    } else {
        language
    }
}

/// Game mode sent to the RGS; blank falls back to `BASE`.
#[must_use]
pub fn effective_mode(mode: &str) -> &str {
    if mode.trim().is_empty() {
        DEFAULT_MODE
    } else {
        mode
    }
}
