//! HTTP client for the movie catalog.
//!
//! A thin wrapper over `reqwest` issuing the two GET endpoints the library
//! depends on: keyword search (`s=` parameter) and detail by id (`i=`
//! parameter). The client enforces two pieces of the fetch contract:
//!
//! - a non-2xx status is a transport failure *before* any JSON parsing is
//!   attempted, and
//! - every call races against a cancellation token so a superseded request
//!   releases its connection promptly instead of running to completion.
//!
//! No request timeout is configured: a hung request simply never resolves
//! and is superseded by the next lookup's cancellation and generation bump.

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::domain::error::{CinetrackError, Result};
use crate::fetch::FetchError;

use super::wire::{DetailResponse, SearchResponse};

/// Client for the catalog's HTTP API.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Creates a client for the given endpoint and key.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CinetrackError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Issues a keyword search.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Cancelled`] if `cancel` fires first, a status
    /// failure on a non-2xx answer, and transport/decode failures otherwise.
    pub async fn search(
        &self,
        query: &str,
        cancel: CancellationToken,
    ) -> std::result::Result<SearchResponse, FetchError> {
        self.get_json(&[("s", query)], cancel).await
    }

    /// Fetches the detail record for one id.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`search`](Self::search).
    pub async fn detail(
        &self,
        id: &str,
        cancel: CancellationToken,
    ) -> std::result::Result<DetailResponse, FetchError> {
        self.get_json(&[("i", id)], cancel).await
    }

    /// Runs one GET against the catalog, racing it against the token.
    async fn get_json<T: DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
        cancel: CancellationToken,
    ) -> std::result::Result<T, FetchError> {
        let request = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send();

        let response = tokio::select! {
            result = request => result.map_err(|e| FetchError::Transport(e.to_string()))?,
            _ = cancel.cancelled() => return Err(FetchError::Cancelled),
        };

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "catalog answered with non-success status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = tokio::select! {
            result = response.json::<T>() => {
                result.map_err(|e| FetchError::Decode(e.to_string()))?
            }
            _ = cancel.cancelled() => return Err(FetchError::Cancelled),
        };

        Ok(body)
    }
}
