//! # Domino Bash
//!
//! Player-side round lifecycle for the Domino Bash casino game, played
//! against a Stake-style RGS (Remote Gaming Server) wallet API.
//!
//! ## Core Modules
//!
//! - [`money`]: integer minor-unit amounts and display conversion
//! - [`session`] and [`config`]: session identity and validated client configuration
//! - [`wallet`]: the three RGS wallet calls over HTTP
//! - [`round`]: the round state machine, its notifications and its actor
//!
//! Rendering, audio and input belong to the caller. It observes
//! [`round::RoundEvent`]s, implements [`round::Presenter`] for win
//! presentation, and calls back into the machine when its animations finish.
//!
//! ## Example
//!
//! ```
//! use domino_bash::money::Money;
//!
//! let bet = Money::from_minor_units(1_000_000);
//! assert_eq!(bet.times_multiplier(2.5).to_string(), "2.50");
//! ```

pub mod config;
pub mod money;
pub mod round;
pub mod session;
pub mod wallet;

pub use config::{ClientConfig, ConfigError, ConfigOverrides};
pub use money::{CURRENCY_MULTIPLIER, Money};
pub use round::{RoundActor, RoundHandle, RoundMachine, RoundState};
pub use session::Session;
pub use wallet::{HttpWalletClient, WalletApi, WalletError};
