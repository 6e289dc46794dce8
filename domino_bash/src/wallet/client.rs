//! HTTP client for the RGS wallet API.

use super::{
    errors::{WalletError, WalletResult},
    models::{
        AuthenticateRequest, AuthenticateResponse, EndRoundRequest, EndRoundResponse,
        PlayRequest, PlayResponse,
    },
};
use crate::money::Money;
use crate::session::{effective_language, effective_mode};
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;

/// The three wallet operations the round machine depends on.
///
/// Each call is a single round trip. Nothing is retried; the caller decides
/// what a failure means.
#[async_trait]
pub trait WalletApi: Send + Sync {
    /// Open the session. Must be called before anything else.
    async fn authenticate(
        &self,
        session_id: &str,
        language: &str,
    ) -> WalletResult<AuthenticateResponse>;

    /// Place a bet of `amount` and receive the round outcome.
    async fn play(
        &self,
        session_id: &str,
        currency: &str,
        mode: &str,
        amount: Money,
    ) -> WalletResult<PlayResponse>;

    /// Settle a round that paid out.
    async fn end_round(&self, session_id: &str) -> WalletResult<EndRoundResponse>;
}

#[async_trait]
impl<T: WalletApi + ?Sized> WalletApi for Arc<T> {
    async fn authenticate(
        &self,
        session_id: &str,
        language: &str,
    ) -> WalletResult<AuthenticateResponse> {
        (**self).authenticate(session_id, language).await
    }

    async fn play(
        &self,
        session_id: &str,
        currency: &str,
        mode: &str,
        amount: Money,
    ) -> WalletResult<PlayResponse> {
        (**self).play(session_id, currency, mode, amount).await
    }

    async fn end_round(&self, session_id: &str) -> WalletResult<EndRoundResponse> {
        (**self).end_round(session_id).await
    }
}

/// reqwest-backed [`WalletApi`]
#[derive(Clone, Debug)]
pub struct HttpWalletClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpWalletClient {
    /// Create a new client for the RGS at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client sharing an existing connection pool
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> WalletResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .inspect_err(|e| log::error!("POST {url} failed: {e}"))?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::error!("POST {url} returned {status}: {text}");
            return Err(WalletError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        log::debug!("POST {url} -> {text}");
        serde_json::from_str(&text).map_err(|e| {
            log::error!("POST {url}: could not decode response: {e}");
            WalletError::Decode(e)
        })
    }
}

#[async_trait]
impl WalletApi for HttpWalletClient {
    async fn authenticate(
        &self,
        session_id: &str,
        language: &str,
    ) -> WalletResult<AuthenticateResponse> {
        let request = AuthenticateRequest {
            session_id,
            language: effective_language(language),
        };
        self.post("/wallet/authenticate", &request).await
    }

    async fn play(
        &self,
        session_id: &str,
        currency: &str,
        mode: &str,
        amount: Money,
    ) -> WalletResult<PlayResponse> {
        let request = PlayRequest {
            session_id,
            currency,
            mode: effective_mode(mode),
            amount: amount.minor_units(),
        };
        self.post("/wallet/play", &request).await
    }

    async fn end_round(&self, session_id: &str) -> WalletResult<EndRoundResponse> {
        let request = EndRoundRequest { session_id };
        self.post("/wallet/end-round", &request).await
    }
}
