//! Terminal stand-in for the game's presentation layer.

use async_trait::async_trait;
use domino_bash::{
    money::Money,
    round::{PlayFlags, Presenter, RoundEvent, RoundState, Subscription},
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

const WIN_DISPLAY: Duration = Duration::from_secs(2);
const TURBO_WIN_DISPLAY: Duration = Duration::from_secs(1);

/// How long the domino fall "animation" runs before presentation completes
pub fn fall_duration(flags: PlayFlags) -> Duration {
    if flags.instant {
        Duration::ZERO
    } else if flags.turbo {
        Duration::from_millis(500)
    } else {
        Duration::from_millis(1500)
    }
}

/// Prints wins and holds them on screen for a moment
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    turbo: AtomicBool,
}

impl TerminalPresenter {
    /// Applies to the next win shown
    pub fn set_turbo(&self, turbo: bool) {
        self.turbo.store(turbo, Ordering::Relaxed);
    }

    pub fn win_display(&self) -> Duration {
        if self.turbo.load(Ordering::Relaxed) {
            TURBO_WIN_DISPLAY
        } else {
            WIN_DISPLAY
        }
    }
}

#[async_trait]
impl Presenter for TerminalPresenter {
    async fn show_win(&self, amount: Money) {
        println!("\n  YOU WON\n  ${amount}\n");
        tokio::time::sleep(self.win_display()).await;
    }
}

/// Line to print for an event, if it is worth showing
pub fn describe(event: &RoundEvent) -> Option<String> {
    match event {
        RoundEvent::BalanceChanged(_) | RoundEvent::BetChanged(_) => Some(event.to_string()),
        RoundEvent::AuthenticationComplete => Some("Loading game...".to_string()),
        RoundEvent::StateChanged(RoundState::ResolvingRound) => {
            Some("Resuming unfinished round...".to_string())
        }
        RoundEvent::StateChanged(_)
        | RoundEvent::WinPresented(_)
        | RoundEvent::AuthenticationFailed(_) => None,
    }
}

/// Print events until the round actor goes away
pub async fn print_events(mut subscription: Subscription) {
    while let Some(event) = subscription.events.recv().await {
        log::debug!("event: {event:?}");
        if let Some(line) = describe(&event) {
            println!("{line}");
        }
    }
}
