//! Wallet API request and response payloads.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// `balance` object returned by every wallet endpoint
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Balance {
    pub amount: Money,
}

/// Server view of a round in progress or just completed
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoundOutcome {
    pub active: bool,
    pub payout_multiplier: f64,
    pub state: String,
}

impl RoundOutcome {
    /// A zero (or negative) multiplier is a loss
    pub fn is_win(&self) -> bool {
        self.payout_multiplier > 0.0
    }
}

/// Server provided game configuration
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    #[serde(default)]
    pub bet_levels: Option<Vec<i64>>,
}

/// Response of `POST /wallet/authenticate`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AuthenticateResponse {
    pub balance: Balance,
    #[serde(default)]
    pub round: Option<RoundOutcome>,
    #[serde(default)]
    pub config: Option<GameConfig>,
}

impl AuthenticateResponse {
    /// Bet levels, if the server sent a non-empty list
    pub fn bet_levels(&self) -> Option<&[i64]> {
        self.config
            .as_ref()
            .and_then(|c| c.bet_levels.as_deref())
            .filter(|levels| !levels.is_empty())
    }

    /// The carried-over round, if it still needs resolving
    pub fn active_round(&self) -> Option<&RoundOutcome> {
        self.round.as_ref().filter(|r| r.active)
    }
}

/// Response of `POST /wallet/play`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PlayResponse {
    pub round: RoundOutcome,
    pub balance: Balance,
}

/// Response of `POST /wallet/end-round`
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EndRoundResponse {
    pub balance: Balance,
}

#[derive(Debug, Serialize)]
pub(crate) struct AuthenticateRequest<'a> {
    #[serde(rename = "sessionID")]
    pub session_id: &'a str,
    pub language: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PlayRequest<'a> {
    #[serde(rename = "sessionID")]
    pub session_id: &'a str,
    pub currency: &'a str,
    pub mode: &'a str,
    pub amount: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct EndRoundRequest<'a> {
    #[serde(rename = "sessionID")]
    pub session_id: &'a str,
}
