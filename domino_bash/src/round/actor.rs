//! Round actor: a single task that owns the machine and drains an inbox.

use super::{
    events::{Subscription, SubscriptionId},
    ladder::BetDirection,
    machine::{PlayFlags, PlayStart, RoundMachine, RoundSettlement, RoundSnapshot},
    presenter::Presenter,
    state::RoundState,
};
use crate::wallet::{WalletApi, WalletError, WalletResult};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

const INBOX_CAPACITY: usize = 64;

/// Errors surfaced through a [`RoundHandle`]
#[derive(Debug, Error)]
pub enum RoundError {
    #[error("round actor is closed")]
    ActorClosed,
    #[error(transparent)]
    Wallet(#[from] WalletError),
}

/// Messages that can be sent to a RoundActor
#[derive(Debug)]
pub enum RoundMessage {
    Authenticate {
        response: oneshot::Sender<WalletResult<RoundState>>,
    },
    EnterIdle {
        response: oneshot::Sender<RoundState>,
    },
    AdjustBet {
        direction: BetDirection,
        response: oneshot::Sender<bool>,
    },
    StartPlay {
        flags: PlayFlags,
        response: oneshot::Sender<PlayStart>,
    },
    PresentationComplete {
        response: oneshot::Sender<RoundSettlement>,
    },
    ResolveActiveRound {
        response: oneshot::Sender<RoundSettlement>,
    },
    Subscribe {
        response: oneshot::Sender<Subscription>,
    },
    Unsubscribe {
        id: SubscriptionId,
        response: oneshot::Sender<bool>,
    },
    GetSnapshot {
        response: oneshot::Sender<RoundSnapshot>,
    },
    Shutdown,
}

/// Round actor handle for sending messages
#[derive(Clone, Debug)]
pub struct RoundHandle {
    sender: mpsc::Sender<RoundMessage>,
}

impl RoundHandle {
    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> RoundMessage,
    ) -> Result<T, RoundError> {
        let (response, receiver) = oneshot::channel();
        self.sender
            .send(make(response))
            .await
            .map_err(|_| RoundError::ActorClosed)?;
        receiver.await.map_err(|_| RoundError::ActorClosed)
    }

    pub async fn authenticate(&self) -> Result<RoundState, RoundError> {
        let result = self
            .request(|response| RoundMessage::Authenticate { response })
            .await?;
        Ok(result?)
    }

    pub async fn enter_idle(&self) -> Result<RoundState, RoundError> {
        self.request(|response| RoundMessage::EnterIdle { response })
            .await
    }

    pub async fn adjust_bet(&self, direction: BetDirection) -> Result<bool, RoundError> {
        self.request(|response| RoundMessage::AdjustBet {
            direction,
            response,
        })
        .await
    }

    pub async fn start_play(&self, flags: PlayFlags) -> Result<PlayStart, RoundError> {
        self.request(|response| RoundMessage::StartPlay { flags, response })
            .await
    }

    pub async fn presentation_complete(&self) -> Result<RoundSettlement, RoundError> {
        self.request(|response| RoundMessage::PresentationComplete { response })
            .await
    }

    pub async fn resolve_active_round(&self) -> Result<RoundSettlement, RoundError> {
        self.request(|response| RoundMessage::ResolveActiveRound { response })
            .await
    }

    pub async fn subscribe(&self) -> Result<Subscription, RoundError> {
        self.request(|response| RoundMessage::Subscribe { response })
            .await
    }

    pub async fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, RoundError> {
        self.request(|response| RoundMessage::Unsubscribe { id, response })
            .await
    }

    pub async fn snapshot(&self) -> Result<RoundSnapshot, RoundError> {
        self.request(|response| RoundMessage::GetSnapshot { response })
            .await
    }

    /// Ask the actor to stop after the messages already queued
    pub async fn shutdown(&self) -> Result<(), RoundError> {
        self.sender
            .send(RoundMessage::Shutdown)
            .await
            .map_err(|_| RoundError::ActorClosed)
    }
}

/// Actor owning one [`RoundMachine`] and the presenter it settles wins with
pub struct RoundActor<W> {
    machine: RoundMachine<W>,
    presenter: Arc<dyn Presenter>,
    inbox: mpsc::Receiver<RoundMessage>,
}

impl<W: WalletApi + 'static> RoundActor<W> {
    /// Create a new round actor
    ///
    /// # Returns
    ///
    /// * `(RoundActor, RoundHandle)` - Actor and handle for sending messages
    pub fn new(machine: RoundMachine<W>, presenter: Arc<dyn Presenter>) -> (Self, RoundHandle) {
        let (sender, inbox) = mpsc::channel(INBOX_CAPACITY);
        let actor = Self {
            machine,
            presenter,
            inbox,
        };
        (actor, RoundHandle { sender })
    }

    /// Spawn the actor on the current Tokio runtime
    pub fn spawn(machine: RoundMachine<W>, presenter: Arc<dyn Presenter>) -> RoundHandle {
        let (actor, handle) = Self::new(machine, presenter);
        tokio::spawn(actor.run());
        handle
    }

    /// Run the event loop until shutdown or until every handle is dropped.
    /// Returns the machine so its final state can be inspected.
    pub async fn run(mut self) -> RoundMachine<W> {
        log::info!(
            "Round actor for session {} starting",
            self.machine.session().session_id
        );

        while let Some(message) = self.inbox.recv().await {
            if !self.handle_message(message).await {
                break;
            }
        }

        log::info!(
            "Round actor for session {} stopped in state {}",
            self.machine.session().session_id,
            self.machine.state()
        );
        self.machine
    }

    /// Returns false when the actor should stop
    async fn handle_message(&mut self, message: RoundMessage) -> bool {
        match message {
            RoundMessage::Authenticate { response } => {
                let result = self.machine.authenticate().await;
                let _ = response.send(result);
            }
            RoundMessage::EnterIdle { response } => {
                self.machine.enter_idle();
                let _ = response.send(self.machine.state());
            }
            RoundMessage::AdjustBet {
                direction,
                response,
            } => {
                let _ = response.send(self.machine.adjust_bet(direction));
            }
            RoundMessage::StartPlay { flags, response } => {
                let result = self.machine.start_play(flags).await;
                let _ = response.send(result);
            }
            RoundMessage::PresentationComplete { response } => {
                let result = self
                    .machine
                    .presentation_complete(self.presenter.as_ref())
                    .await;
                let _ = response.send(result);
            }
            RoundMessage::ResolveActiveRound { response } => {
                let result = self
                    .machine
                    .resolve_active_round(self.presenter.as_ref())
                    .await;
                let _ = response.send(result);
            }
            RoundMessage::Subscribe { response } => {
                let _ = response.send(self.machine.subscribe());
            }
            RoundMessage::Unsubscribe { id, response } => {
                let _ = response.send(self.machine.unsubscribe(id));
            }
            RoundMessage::GetSnapshot { response } => {
                let _ = response.send(self.machine.snapshot());
            }
            RoundMessage::Shutdown => return false,
        }
        true
    }
}
