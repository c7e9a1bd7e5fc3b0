//! Streaming service clients and the common interface the converter uses to reach them.

/// Qobuz catalog client.
pub mod qobuz;
/// Spotify Web API client.
pub mod spotify;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;
use crate::converter::track::{Candidate, Service, TrackMetadata};
use crate::converter::{ConvertError, ConvertResult};
use qobuz::QobuzApi;
use spotify::SpotifyApi;

/// Lookup and search capabilities every supported service provides.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MusicService: Send + Sync {
    /// Fetches metadata for the track with the given service-specific id.
    async fn fetch_track(&self, id: &str) -> ConvertResult<TrackMetadata>;

    /// Searches the catalog, returning at most `limit` results in relevance order.
    async fn search(&self, query: &str, limit: usize) -> ConvertResult<Vec<Candidate>>;
}

/// One client per [`Service`].
pub struct Providers {
    spotify: Arc<dyn MusicService>,
    qobuz: Arc<dyn MusicService>,
}

impl Providers {
    pub fn new(spotify: Arc<dyn MusicService>, qobuz: Arc<dyn MusicService>) -> Self {
        Self { spotify, qobuz }
    }

    /// Builds the real API clients from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(SpotifyApi::new(config.spotify.clone())),
            Arc::new(QobuzApi::new(config.qobuz.clone())),
        )
    }

    /// Returns the client for `service`.
    pub fn get(&self, service: Service) -> &dyn MusicService {
        match service {
            Service::Spotify => self.spotify.as_ref(),
            Service::Qobuz => self.qobuz.as_ref(),
        }
    }
}

/// Reads a track lookup response body.
///
/// Returns `Ok(None)` when the service reports the track as missing: a 404 status,
/// an empty body or a JSON `null`. Any other non-2xx status is an upstream error.
async fn lookup_body(response: Response, service: Service) -> ConvertResult<Option<String>> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }

    let body = read_body(response, service).await?;
    if !status.is_success() {
        return Err(ConvertError::Upstream(format!(
            "{} API error: {} - {}",
            service, status, body
        )));
    }

    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }

    Ok(Some(body))
}

/// Ensures a non-lookup response succeeded and returns its body.
async fn success_body(response: Response, service: Service) -> ConvertResult<String> {
    let status = response.status();
    let body = read_body(response, service).await?;

    if !status.is_success() {
        return Err(ConvertError::Upstream(format!(
            "{} API error: {} - {}",
            service, status, body
        )));
    }

    Ok(body)
}

async fn read_body(response: Response, service: Service) -> ConvertResult<String> {
    response.text().await.map_err(|e| {
        ConvertError::Upstream(format!("Failed to read {} response: {}", service, e))
    })
}

/// Decodes a JSON body, treating a shape mismatch as an upstream error.
fn decode<T: DeserializeOwned>(body: &str, service: Service) -> ConvertResult<T> {
    serde_json::from_str(body).map_err(|e| {
        ConvertError::Upstream(format!("Failed to parse {} response: {}", service, e))
    })
}

/// Decodes search result items one at a time. Items that do not fit `T`,
/// including `null` entries, are dropped instead of failing the whole page.
fn decode_items<T: DeserializeOwned>(items: Vec<Value>, service: Service) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(track) => Some(track),
            Err(e) => {
                debug!(%service, error = %e, "Skipping undecodable search item");
                None
            }
        })
        .collect()
}
