//! Round lifecycle states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exactly one state is active at a time. `Authenticating` is initial.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    #[default]
    Authenticating,
    /// A round left active by a previous client waits to be replayed.
    ResolvingRound,
    Menu,
    Idle,
    /// Bet placed; waiting for the play response or for presentation.
    Playing,
    ShowingResult,
}

impl RoundState {
    /// Whether the player may adjust the bet or start a round.
    pub fn accepts_player_input(self) -> bool {
        self == RoundState::Idle
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            RoundState::Authenticating => "authenticating",
            RoundState::ResolvingRound => "resolving_round",
            RoundState::Menu => "menu",
            RoundState::Idle => "idle",
            RoundState::Playing => "playing",
            RoundState::ShowingResult => "showing_result",
        };
        write!(f, "{repr}")
    }
}
