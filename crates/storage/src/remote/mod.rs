use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::repository::{CollectionRepository, FoodRepository, Storage, StorageError};

mod collection_repo;
mod food_repo;

pub const DEFAULT_BASE_URL: &str = "https://be-flashcard-rikj.onrender.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const BASE_URL_ENV: &str = "FLASHCARD_API_URL";
const TIMEOUT_ENV: &str = "FLASHCARD_API_TIMEOUT_SECS";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RemoteInitError {
    #[error("invalid api base url {raw:?}")]
    InvalidBaseUrl { raw: String },
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

/// Where the flashcard REST service lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RemoteConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `FLASHCARD_API_URL` and `FLASHCARD_API_TIMEOUT_SECS`, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| {
                debug!("{BASE_URL_ENV} not set, using default: {DEFAULT_BASE_URL}");
                DEFAULT_BASE_URL.to_string()
            });
        let timeout_secs = match env::var(TIMEOUT_ENV) {
            Ok(raw) => raw.trim().parse::<u64>().unwrap_or_else(|e| {
                warn!("Invalid {TIMEOUT_ENV} value {raw:?}: {e}");
                DEFAULT_TIMEOUT_SECS
            }),
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// Repository backed by the external flashcard REST service.
#[derive(Clone)]
pub struct RemoteRepository {
    client: Client,
    base: Url,
}

impl RemoteRepository {
    /// Build a client for the configured service.
    ///
    /// # Errors
    ///
    /// Returns `RemoteInitError::InvalidBaseUrl` if the base url cannot be used
    /// as a hierarchical http(s) url, or `RemoteInitError::Client` if the HTTP
    /// client cannot be constructed.
    pub fn connect(config: &RemoteConfig) -> Result<Self, RemoteInitError> {
        let raw = config.base_url.trim();
        let base = Url::parse(raw)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base())
            .ok_or_else(|| RemoteInitError::InvalidBaseUrl {
                raw: config.base_url.clone(),
            })?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, base })
    }

    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, StorageError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| StorageError::Connection(format!("unusable base url {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }
}

/// Map a response status to `StorageError`, passing successful responses through.
pub(crate) fn check_status(response: Response) -> Result<Response, StorageError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    warn!(%status, url = %response.url(), "remote request failed");
    if status == StatusCode::NOT_FOUND {
        return Err(StorageError::NotFound);
    }
    Err(StorageError::HttpStatus(status.as_u16()))
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, StorageError> {
    let body = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&body).map_err(|e| StorageError::Serialization(e.to_string()))
}

pub(crate) fn transport_error(err: reqwest::Error) -> StorageError {
    if err.is_decode() {
        return StorageError::Serialization(err.to_string());
    }
    warn!(error = %err, "remote transport error");
    StorageError::Connection(err.to_string())
}

impl Storage {
    /// Build a `Storage` backed by the remote REST service.
    ///
    /// # Errors
    ///
    /// Returns `RemoteInitError` if the client cannot be configured.
    pub fn remote(config: &RemoteConfig) -> Result<Self, RemoteInitError> {
        let repo = RemoteRepository::connect(config)?;
        let collections: Arc<dyn CollectionRepository> = Arc::new(repo.clone());
        let foods: Arc<dyn FoodRepository> = Arc::new(repo);
        Ok(Self { collections, foods })
    }
}
