//! Round lifecycle: authenticate, idle, play, resolve, end round.
//!
//! This module implements:
//! - [`RoundMachine`]: the state machine over [`RoundState`], owning balance
//!   and bet ladder
//! - [`BetLadder`]: the server-controlled list of bet denominations
//! - [`RoundEvent`] notifications delivered to explicit subscribers
//! - [`RoundActor`]/[`RoundHandle`]: single-writer access from many tasks
//!
//! ## Transitions
//!
//! ```text
//! Authenticating --auth ok, no active round--> Menu --enter_idle--> Idle
//! Authenticating --auth ok, active round-----> ResolvingRound
//! Idle --start_play--> Playing --presentation_complete--> ShowingResult --> Idle
//!                      Playing --play failed or lost----> Idle
//! ResolvingRound --resolve_active_round--> ShowingResult/Idle
//! ```
//!
//! Calls made outside their legal state are ignored, never errors.
//!
//! ## Example
//!
//! ```no_run
//! use domino_bash::round::{BetLadder, NoPresentation, PlayFlags, PlayStart, RoundMachine};
//! use domino_bash::{session::Session, wallet::HttpWalletClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Session::new("session-id", "https://rgs.example.com");
//!     let wallet = HttpWalletClient::new(session.rgs_base_url.clone());
//!     let mut machine = RoundMachine::new(wallet, session, BetLadder::default());
//!
//!     machine.authenticate().await?;
//!     machine.enter_idle();
//!     if let PlayStart::Placed(_) = machine.start_play(PlayFlags::default()).await {
//!         let settlement = machine.presentation_complete(&NoPresentation).await;
//!         println!("{settlement:?}, balance {}", machine.balance());
//!     }
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod events;
pub mod ladder;
pub mod machine;
pub mod presenter;
pub mod state;

pub use actor::{RoundActor, RoundError, RoundHandle, RoundMessage};
pub use events::{RoundEvent, Subscribers, Subscription, SubscriptionId};
pub use ladder::{BetDirection, BetLadder, LadderError};
pub use machine::{PendingRound, PlayFlags, PlayStart, RoundMachine, RoundSettlement, RoundSnapshot};
pub use presenter::{NoPresentation, Presenter};
pub use state::RoundState;
