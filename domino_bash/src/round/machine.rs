//! Round state machine.
//!
//! Owns the session, the balance, the bet ladder and the current
//! [`RoundState`]. Every transition takes `&mut self` and awaits its wallet
//! call inside the transition, so transitions never interleave.
//!
//! Balance handling is optimistic: the bet is debited before the play call,
//! and a win is credited before end-round is confirmed. If end-round fails
//! the local balance keeps the credit and may no longer match the server.

use super::{
    events::{RoundEvent, Subscribers, Subscription, SubscriptionId},
    ladder::{BetDirection, BetLadder, LadderError, PREFERRED_BET_INDEX},
    presenter::Presenter,
    state::RoundState,
};
use crate::{
    config::ClientConfig,
    money::Money,
    session::Session,
    wallet::{AuthenticateResponse, RoundOutcome, WalletApi, WalletResult},
};

/// Options the player chose when starting a round. Presentation only.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PlayFlags {
    pub turbo: bool,
    pub instant: bool,
}

/// A round outcome held until presentation consumes it
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRound {
    pub round: RoundOutcome,
    /// Balance the server reported alongside the round
    pub balance: Money,
}

/// Result of [`RoundMachine::start_play`]
#[derive(Clone, Debug, PartialEq)]
pub enum PlayStart {
    /// Not in `Idle`; nothing happened
    Ignored,
    /// Balance below the current bet; no call was made
    InsufficientFunds { balance: Money, bet: Money },
    /// The server accepted the bet; awaiting presentation
    Placed(RoundOutcome),
    /// The play call failed; the debit was reversed
    Failed(String),
}

/// Result of settling a round after presentation
#[derive(Clone, Debug, PartialEq)]
pub enum RoundSettlement {
    /// No round was waiting in a state that allows settling
    Ignored,
    Lost,
    /// `server_balance` is `None` when end-round failed
    Won {
        amount: Money,
        server_balance: Option<Money>,
    },
}

/// Point-in-time copy of the machine's observable state
#[derive(Clone, Debug, PartialEq)]
pub struct RoundSnapshot {
    pub state: RoundState,
    pub balance: Money,
    pub bet: Money,
    pub bet_index: usize,
    pub bet_levels: Vec<Money>,
    pub pending: Option<PendingRound>,
}

/// The round lifecycle for one player session
pub struct RoundMachine<W> {
    wallet: W,
    session: Session,
    state: RoundState,
    balance: Money,
    ladder: BetLadder,
    pending: Option<PendingRound>,
    subscribers: Subscribers,
}

impl<W: WalletApi> RoundMachine<W> {
    /// Create a machine in `Authenticating` with a zero balance
    pub fn new(wallet: W, session: Session, ladder: BetLadder) -> Self {
        Self {
            wallet,
            session,
            state: RoundState::Authenticating,
            balance: Money::ZERO,
            ladder,
            pending: None,
            subscribers: Subscribers::default(),
        }
    }

    /// Create a machine from loaded configuration
    ///
    /// # Errors
    ///
    /// Returns error if the configured fallback ladder is invalid
    pub fn from_config(wallet: W, config: &ClientConfig) -> Result<Self, LadderError> {
        Ok(Self::new(
            wallet,
            config.session.clone(),
            config.fallback_ladder()?,
        ))
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn current_bet(&self) -> Money {
        self.ladder.current()
    }

    pub fn ladder(&self) -> &BetLadder {
        &self.ladder
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn pending_round(&self) -> Option<&PendingRound> {
        self.pending.as_ref()
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            state: self.state,
            balance: self.balance,
            bet: self.ladder.current(),
            bet_index: self.ladder.index(),
            bet_levels: self.ladder.levels().to_vec(),
            pending: self.pending.clone(),
        }
    }

    pub fn subscribe(&mut self) -> Subscription {
        self.subscribers.subscribe()
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Open the session with the RGS.
    ///
    /// Only acts in `Authenticating`; elsewhere it returns the current state.
    /// On failure the machine stays in `Authenticating` so the caller may try
    /// again.
    ///
    /// # Errors
    ///
    /// Returns the wallet error after emitting `AuthenticationFailed`
    pub async fn authenticate(&mut self) -> WalletResult<RoundState> {
        if self.state != RoundState::Authenticating {
            log::debug!("authenticate ignored in state {}", self.state);
            return Ok(self.state);
        }

        let result = self
            .wallet
            .authenticate(&self.session.session_id, &self.session.language)
            .await;

        match result {
            Ok(response) => {
                self.apply_authentication(response);
                Ok(self.state)
            }
            Err(e) => {
                log::error!("Authentication failed: {e}");
                self.subscribers
                    .emit(RoundEvent::AuthenticationFailed(e.to_string()));
                Err(e)
            }
        }
    }

    fn apply_authentication(&mut self, response: AuthenticateResponse) {
        self.set_balance(response.balance.amount);

        if let Some(levels) = response.bet_levels() {
            match BetLadder::new(levels, PREFERRED_BET_INDEX) {
                Ok(ladder) => {
                    self.ladder = ladder;
                    self.subscribers
                        .emit(RoundEvent::BetChanged(self.ladder.current()));
                }
                Err(e) => log::warn!("Keeping current bet ladder, server ladder rejected: {e}"),
            }
        }

        match response.active_round() {
            Some(round) => {
                log::info!("Active round detected, preparing to resolve");
                self.pending = Some(PendingRound {
                    round: round.clone(),
                    balance: response.balance.amount,
                });
                self.set_state(RoundState::ResolvingRound);
            }
            None => self.set_state(RoundState::Menu),
        }

        self.subscribers.emit(RoundEvent::AuthenticationComplete);
    }

    /// Move from `Menu` (or `Idle`) to `Idle` and rebroadcast balance and bet.
    pub fn enter_idle(&mut self) {
        if !matches!(self.state, RoundState::Menu | RoundState::Idle) {
            log::debug!("enter_idle ignored in state {}", self.state);
            return;
        }
        self.set_state(RoundState::Idle);
        self.subscribers.emit(RoundEvent::BalanceChanged(self.balance));
        self.subscribers
            .emit(RoundEvent::BetChanged(self.ladder.current()));
    }

    /// Step the bet one level. Returns whether it moved.
    pub fn adjust_bet(&mut self, direction: BetDirection) -> bool {
        if !self.state.accepts_player_input() {
            log::debug!("adjust_bet ignored in state {}", self.state);
            return false;
        }
        let moved = self.ladder.step(direction);
        if moved {
            self.subscribers
                .emit(RoundEvent::BetChanged(self.ladder.current()));
        }
        moved
    }

    /// Debit the current bet and ask the server for a round.
    ///
    /// On success the machine stays in `Playing` until
    /// [`RoundMachine::presentation_complete`]. On failure the debit is
    /// reversed and the machine returns to `Idle`.
    pub async fn start_play(&mut self, flags: PlayFlags) -> PlayStart {
        if !self.state.accepts_player_input() {
            log::debug!("start_play ignored in state {}", self.state);
            return PlayStart::Ignored;
        }

        let bet = self.ladder.current();
        if self.balance < bet {
            log::debug!("start_play rejected: balance {} below bet {bet}", self.balance);
            return PlayStart::InsufficientFunds {
                balance: self.balance,
                bet,
            };
        }

        log::info!(
            "Placing bet {bet} (turbo: {}, instant: {})",
            flags.turbo,
            flags.instant
        );
        self.set_state(RoundState::Playing);
        self.set_balance(self.balance.saturating_sub(bet));

        let result = self
            .wallet
            .play(
                &self.session.session_id,
                &self.session.currency,
                &self.session.mode,
                bet,
            )
            .await;

        match result {
            Ok(response) => {
                self.pending = Some(PendingRound {
                    round: response.round.clone(),
                    balance: response.balance.amount,
                });
                PlayStart::Placed(response.round)
            }
            Err(e) => {
                log::error!("Play failed, refunding bet {bet}: {e}");
                self.set_balance(self.balance.saturating_add(bet));
                self.set_state(RoundState::Idle);
                PlayStart::Failed(e.to_string())
            }
        }
    }

    /// Called once the round's presentation has finished.
    pub async fn presentation_complete<P>(&mut self, presenter: &P) -> RoundSettlement
    where
        P: Presenter + ?Sized,
    {
        if self.state != RoundState::Playing || self.pending.is_none() {
            log::debug!("presentation_complete ignored in state {}", self.state);
            return RoundSettlement::Ignored;
        }
        self.settle(presenter).await
    }

    /// Replay a round carried over from a previous session.
    pub async fn resolve_active_round<P>(&mut self, presenter: &P) -> RoundSettlement
    where
        P: Presenter + ?Sized,
    {
        if self.state != RoundState::ResolvingRound || self.pending.is_none() {
            log::debug!("resolve_active_round ignored in state {}", self.state);
            return RoundSettlement::Ignored;
        }
        log::info!("Resolving carried-over round");
        self.settle(presenter).await
    }

    async fn settle<P>(&mut self, presenter: &P) -> RoundSettlement
    where
        P: Presenter + ?Sized,
    {
        let Some(pending) = self.pending.take() else {
            return RoundSettlement::Ignored;
        };

        if !pending.round.is_win() {
            self.set_state(RoundState::Idle);
            return RoundSettlement::Lost;
        }

        let amount = self
            .ladder
            .current()
            .times_multiplier(pending.round.payout_multiplier);
        self.set_balance(self.balance.saturating_add(amount));
        self.set_state(RoundState::ShowingResult);

        if amount.is_positive() {
            presenter.show_win(amount).await;
            self.subscribers.emit(RoundEvent::WinPresented(amount));
        }

        let server_balance = match self.wallet.end_round(&self.session.session_id).await {
            Ok(response) => {
                self.set_balance(response.balance.amount);
                Some(response.balance.amount)
            }
            Err(e) => {
                log::warn!(
                    "End-round failed, local balance {} may differ from the server: {e}",
                    self.balance
                );
                None
            }
        };

        self.set_state(RoundState::Idle);
        RoundSettlement::Won {
            amount,
            server_balance,
        }
    }

    fn set_state(&mut self, state: RoundState) {
        if self.state == state {
            return;
        }
        log::debug!("Round state {} -> {state}", self.state);
        self.state = state;
        self.subscribers.emit(RoundEvent::StateChanged(state));
    }

    fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
        self.subscribers.emit(RoundEvent::BalanceChanged(balance));
    }
}
