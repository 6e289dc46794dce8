//! The presentation hook the machine awaits while settling a win.

use crate::money::Money;
use async_trait::async_trait;

/// Called by the round machine when a win needs presenting.
///
/// The machine waits for `show_win` to return before settling the round
/// with the server, so implementations must not call back into the same
/// machine or actor from inside it.
#[async_trait]
pub trait Presenter: Send + Sync {
    async fn show_win(&self, amount: Money);
}

/// Presenter that returns immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPresentation;

#[async_trait]
impl Presenter for NoPresentation {
    async fn show_win(&self, _amount: Money) {}
}
