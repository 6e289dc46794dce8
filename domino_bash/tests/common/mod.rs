//! Shared helpers for integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use domino_bash::{
    money::Money,
    round::Presenter,
    wallet::{
        AuthenticateResponse, Balance, EndRoundResponse, GameConfig, PlayResponse, RoundOutcome,
        WalletApi, WalletError, WalletResult,
    },
};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A wallet call as seen by the scripted wallet
#[derive(Clone, Debug, PartialEq)]
pub enum WalletCall {
    Authenticate { session_id: String, language: String },
    Play {
        session_id: String,
        currency: String,
        mode: String,
        amount: Money,
    },
    EndRound { session_id: String },
}

/// Wallet that replays queued responses and records every call
#[derive(Default)]
pub struct ScriptedWallet {
    auth: Mutex<VecDeque<WalletResult<AuthenticateResponse>>>,
    play: Mutex<VecDeque<WalletResult<PlayResponse>>>,
    end_round: Mutex<VecDeque<WalletResult<EndRoundResponse>>>,
    calls: Mutex<Vec<WalletCall>>,
}

impl ScriptedWallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_auth(&self, response: WalletResult<AuthenticateResponse>) {
        self.auth.lock().unwrap().push_back(response);
    }

    pub fn push_play(&self, response: WalletResult<PlayResponse>) {
        self.play.lock().unwrap().push_back(response);
    }

    pub fn push_end_round(&self, response: WalletResult<EndRoundResponse>) {
        self.end_round.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<WalletCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn play_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, WalletCall::Play { .. }))
            .count()
    }

    pub fn end_round_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, WalletCall::EndRound { .. }))
            .count()
    }
}

fn unscripted() -> WalletError {
    WalletError::Status {
        status: 599,
        body: "no scripted response".to_string(),
    }
}

#[async_trait]
impl WalletApi for ScriptedWallet {
    async fn authenticate(
        &self,
        session_id: &str,
        language: &str,
    ) -> WalletResult<AuthenticateResponse> {
        self.calls.lock().unwrap().push(WalletCall::Authenticate {
            session_id: session_id.to_string(),
            language: language.to_string(),
        });
        self.auth.lock().unwrap().pop_front().unwrap_or_else(|| Err(unscripted()))
    }

    async fn play(
        &self,
        session_id: &str,
        currency: &str,
        mode: &str,
        amount: Money,
    ) -> WalletResult<PlayResponse> {
        self.calls.lock().unwrap().push(WalletCall::Play {
            session_id: session_id.to_string(),
            currency: currency.to_string(),
            mode: mode.to_string(),
            amount,
        });
        self.play.lock().unwrap().pop_front().unwrap_or_else(|| Err(unscripted()))
    }

    async fn end_round(&self, session_id: &str) -> WalletResult<EndRoundResponse> {
        self.calls.lock().unwrap().push(WalletCall::EndRound {
            session_id: session_id.to_string(),
        });
        self.end_round
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()))
    }
}

/// Presenter that records every win it was asked to show
#[derive(Default)]
pub struct RecordingPresenter {
    shown: Mutex<Vec<Money>>,
}

impl RecordingPresenter {
    pub fn shown(&self) -> Vec<Money> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait]
impl Presenter for RecordingPresenter {
    async fn show_win(&self, amount: Money) {
        self.shown.lock().unwrap().push(amount);
    }
}

pub fn money(amount: i64) -> Money {
    Money::from_minor_units(amount)
}

pub fn server_error() -> WalletError {
    WalletError::Status {
        status: 500,
        body: "internal error".to_string(),
    }
}

pub fn round(active: bool, payout_multiplier: f64) -> RoundOutcome {
    RoundOutcome {
        active,
        payout_multiplier,
        state: if active { "open" } else { "closed" }.to_string(),
    }
}

pub fn auth_response(
    balance: i64,
    round: Option<RoundOutcome>,
    bet_levels: Option<Vec<i64>>,
) -> AuthenticateResponse {
    AuthenticateResponse {
        balance: Balance {
            amount: money(balance),
        },
        round,
        config: bet_levels.map(|levels| GameConfig {
            bet_levels: Some(levels),
        }),
    }
}

pub fn play_response(payout_multiplier: f64, balance: i64) -> PlayResponse {
    PlayResponse {
        round: round(payout_multiplier > 0.0, payout_multiplier),
        balance: Balance {
            amount: money(balance),
        },
    }
}

pub fn end_round_response(balance: i64) -> EndRoundResponse {
    EndRoundResponse {
        balance: Balance {
            amount: money(balance),
        },
    }
}
