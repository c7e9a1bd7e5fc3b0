//! Implements [`MusicService`] for Qobuz.
//! Every request carries the configured application id; durations arrive in seconds.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::HTTP_CLIENT;
use crate::config::QobuzConfig;
use crate::converter::track::{Candidate, Service, TrackMetadata};
use crate::converter::{ConvertError, ConvertResult};

use super::{MusicService, decode, decode_items, lookup_body, success_body};

/// A track as returned by `track/get` and inside `catalog/search` results.
#[derive(Debug, Deserialize)]
struct QobuzTrack {
    id: u64,
    title: String,
    performer: Option<QobuzPerformer>,
    /// Seconds.
    #[serde(default)]
    duration: u64,
}

#[derive(Debug, Deserialize)]
struct QobuzPerformer {
    name: String,
}

#[derive(Debug, Deserialize)]
struct QobuzSearchResponse {
    tracks: Option<QobuzPage>,
}

#[derive(Debug, Deserialize)]
struct QobuzPage {
    /// Raw entries, decoded individually into [`QobuzTrack`].
    items: Option<Vec<Value>>,
}

impl QobuzTrack {
    fn into_metadata(self) -> Option<TrackMetadata> {
        let artist = self.performer?.name;
        TrackMetadata::new(self.title, artist, self.duration.saturating_mul(1000))
    }

    fn into_candidate(self) -> Option<Candidate> {
        let id = self.id.to_string();
        Some(Candidate {
            id,
            track: self.into_metadata()?,
        })
    }
}

/// Qobuz catalog API client.
pub struct QobuzApi {
    config: QobuzConfig,
}

impl QobuzApi {
    pub fn new(config: QobuzConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl MusicService for QobuzApi {
    async fn fetch_track(&self, id: &str) -> ConvertResult<TrackMetadata> {
        debug!(%id, "Fetching Qobuz track");

        let response = HTTP_CLIENT
            .get(format!("{}/track/get", self.config.api_url))
            .query(&[("app_id", self.config.app_id.as_str()), ("track_id", id)])
            .send()
            .await
            .map_err(|e| ConvertError::Upstream(format!("Failed to request Qobuz track: {}", e)))?;

        let Some(body) = lookup_body(response, Service::Qobuz).await? else {
            return Err(ConvertError::TrackNotFound(Service::Qobuz));
        };

        decode::<QobuzTrack>(&body, Service::Qobuz)?
            .into_metadata()
            .ok_or(ConvertError::TrackNotFound(Service::Qobuz))
    }

    async fn search(&self, query: &str, limit: usize) -> ConvertResult<Vec<Candidate>> {
        let limit = limit.to_string();
        debug!(%query, "Searching Qobuz");

        let response = HTTP_CLIENT
            .get(format!("{}/catalog/search", self.config.api_url))
            .query(&[
                ("app_id", self.config.app_id.as_str()),
                ("query", query),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ConvertError::Upstream(format!("Failed to search Qobuz: {}", e)))?;

        let body = success_body(response, Service::Qobuz).await?;
        let results: QobuzSearchResponse = decode(&body, Service::Qobuz)?;

        let items = results.tracks.and_then(|page| page.items).unwrap_or_default();

        Ok(decode_items::<QobuzTrack>(items, Service::Qobuz)
            .into_iter()
            .filter_map(QobuzTrack::into_candidate)
            .collect())
    }
}
