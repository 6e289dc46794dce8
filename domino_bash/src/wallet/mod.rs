//! RGS wallet API: payloads, errors and the HTTP client.
//!
//! Three endpoints, all `POST` with a flat JSON body, relative to the
//! configured base url:
//!
//! - `/wallet/authenticate` opens the session and may carry an unfinished round
//! - `/wallet/play` places a bet and returns the round outcome
//! - `/wallet/end-round` settles a winning round
//!
//! ## Example
//!
//! ```no_run
//! use domino_bash::wallet::{HttpWalletClient, WalletApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let wallet = HttpWalletClient::new("https://rgs.example.com");
//!     let auth = wallet.authenticate("session-id", "en").await?;
//!     println!("Balance: {}", auth.balance.amount);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod errors;
pub mod models;

pub use client::{HttpWalletClient, WalletApi};
pub use errors::{WalletError, WalletResult};
pub use models::{
    AuthenticateResponse, Balance, EndRoundResponse, GameConfig, PlayResponse, RoundOutcome,
};
