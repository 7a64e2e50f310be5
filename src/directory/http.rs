//! HTTP implementation of the user directory.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::{Lookup, UserDirectory, UserSummary};
use crate::config::DirectoryConfig;
use crate::{Result, UserboardError};

/// User agent string for directory requests.
const USER_AGENT: &str = concat!("userboard-board-service/", env!("CARGO_PKG_VERSION"));

/// User directory backed by the user service's HTTP API.
///
/// Each request is bounded by the client's request timeout, and a whole
/// `fetch_many` (all of its batch requests) by `lookup_timeout`.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: Client,
    base_url: Url,
    max_batch_size: usize,
    lookup_timeout: Duration,
}

impl HttpUserDirectory {
    /// Create a directory client from configuration.
    pub fn new(config: &DirectoryConfig) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url).map_err(|e| {
            UserboardError::Config(format!("invalid directory base URL: {e}"))
        })?;
        // Keep any path prefix when joining relative endpoints.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| UserboardError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            max_batch_size: config.max_batch_size.max(1),
            lookup_timeout: config.lookup_timeout(),
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, url::ParseError> {
        self.base_url.join(path)
    }

    async fn fetch_batch(
        &self,
        ids: &[i64],
    ) -> std::result::Result<Vec<UserSummary>, DirectoryUnavailable> {
        let joined = ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let response = self
            .client
            .get(self.endpoint("users")?)
            .query(&[("ids", joined)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DirectoryUnavailable::Status(response.status()));
        }

        Ok(response.json::<Vec<UserSummary>>().await?)
    }

    async fn fetch_chunks(
        &self,
        ids: &[i64],
    ) -> std::result::Result<Vec<UserSummary>, DirectoryUnavailable> {
        let mut summaries = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(self.max_batch_size) {
            summaries.extend(self.fetch_batch(chunk).await?);
        }
        Ok(summaries)
    }

    async fn fetch_single(
        &self,
        id: i64,
    ) -> std::result::Result<Option<UserSummary>, DirectoryUnavailable> {
        let response = self
            .client
            .get(self.endpoint(&format!("users/{id}"))?)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(DirectoryUnavailable::Status(response.status()));
        }

        Ok(Some(response.json::<UserSummary>().await?))
    }
}

impl UserDirectory for HttpUserDirectory {
    async fn fetch_many(&self, ids: &[i64]) -> Lookup<Vec<UserSummary>> {
        if ids.is_empty() {
            return Lookup::Found(Vec::new());
        }

        let result = tokio::time::timeout(self.lookup_timeout, self.fetch_chunks(ids))
            .await
            .unwrap_or(Err(DirectoryUnavailable::Deadline(self.lookup_timeout)));

        match result {
            Ok(summaries) => {
                debug!(
                    requested = ids.len(),
                    resolved = summaries.len(),
                    "User directory batch lookup completed"
                );
                Lookup::Found(summaries)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    requested = ids.len(),
                    "User directory batch lookup failed; continuing without author data"
                );
                Lookup::Absent
            }
        }
    }

    async fn fetch_one(&self, id: i64) -> Lookup<UserSummary> {
        match self.fetch_single(id).await {
            Ok(Some(summary)) => Lookup::Found(summary),
            Ok(None) => {
                debug!(user_id = id, "User directory has no such user");
                Lookup::Absent
            }
            Err(e) => {
                warn!(
                    error = %e,
                    user_id = id,
                    "User directory lookup failed; continuing without author data"
                );
                Lookup::Absent
            }
        }
    }
}

/// Reasons a directory request produced no data. Never leaves this module.
#[derive(Debug, thiserror::Error)]
enum DirectoryUnavailable {
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("lookup exceeded {0:?}")]
    Deadline(Duration),
}
