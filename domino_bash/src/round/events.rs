//! Notifications pushed to presentation layers.

use super::state::RoundState;
use crate::money::Money;
use std::collections::BTreeMap;
use std::fmt;
use tokio::sync::mpsc;

/// Everything a presentation layer can observe about the round machine
#[derive(Clone, Debug, PartialEq)]
pub enum RoundEvent {
    StateChanged(RoundState),
    BalanceChanged(Money),
    BetChanged(Money),
    AuthenticationComplete,
    AuthenticationFailed(String),
    WinPresented(Money),
}

impl fmt::Display for RoundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateChanged(state) => write!(f, "state: {state}"),
            Self::BalanceChanged(amount) => write!(f, "BALANCE: ${amount}"),
            Self::BetChanged(amount) => write!(f, "BET: ${amount}"),
            Self::AuthenticationComplete => write!(f, "authenticated"),
            Self::AuthenticationFailed(message) => write!(f, "authentication failed: {message}"),
            Self::WinPresented(amount) => write!(f, "won ${amount}"),
        }
    }
}

/// Identifies one subscriber for later removal
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SubscriptionId(u64);

/// A live subscription: its id and the receiving end of its channel
#[derive(Debug)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub events: mpsc::UnboundedReceiver<RoundEvent>,
}

impl Subscription {
    /// Every event already delivered, without waiting
    pub fn drain(&mut self) -> Vec<RoundEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }
}

/// Explicit observer list. Emission is synchronous and in order.
#[derive(Debug, Default)]
pub struct Subscribers {
    next_id: u64,
    senders: BTreeMap<SubscriptionId, mpsc::UnboundedSender<RoundEvent>>,
}

impl Subscribers {
    pub fn subscribe(&mut self) -> Subscription {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let (sender, events) = mpsc::unbounded_channel();
        self.senders.insert(id, sender);
        Subscription { id, events }
    }

    /// Returns false if the id was unknown (or already pruned).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.senders.remove(&id).is_some()
    }

    /// Deliver to every subscriber, dropping those whose receiver is gone.
    pub fn emit(&mut self, event: RoundEvent) {
        self.senders
            .retain(|_, sender| sender.send(event.clone()).is_ok());
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}
