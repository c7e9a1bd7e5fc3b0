//! Implements [`MusicService`] for Spotify.
//! Authenticates with the client credentials flow on every call; tokens are not cached.

use async_trait::async_trait;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use reqwest::header;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::HTTP_CLIENT;
use crate::config::SpotifyConfig;
use crate::converter::track::{Candidate, Service, TrackMetadata};
use crate::converter::{ConvertError, ConvertResult};

use super::{MusicService, decode, decode_items, lookup_body, success_body};

/// Represents the response from Spotify's token endpoint.
#[derive(Debug, Deserialize)]
struct SpotifyToken {
    /// The OAuth2 access token.
    access_token: String,
}

/// A track object as returned by `/v1/tracks/{id}` and inside search results.
#[derive(Debug, Deserialize)]
struct SpotifyTrack {
    /// Absent for local files.
    id: Option<String>,
    name: String,
    #[serde(default)]
    artists: Vec<SpotifyArtist>,
    duration_ms: u64,
}

#[derive(Debug, Deserialize)]
struct SpotifyArtist {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SpotifySearchResponse {
    tracks: SpotifyPage,
}

#[derive(Debug, Deserialize)]
struct SpotifyPage {
    /// Raw entries, decoded individually into [`SpotifyTrack`].
    items: Option<Vec<Value>>,
}

impl SpotifyTrack {
    /// Uses the first listed artist as the primary artist.
    fn into_metadata(self) -> Option<TrackMetadata> {
        let artist = self.artists.into_iter().next()?.name;
        TrackMetadata::new(self.name, artist, self.duration_ms)
    }

    fn into_candidate(mut self) -> Option<Candidate> {
        let id = self.id.take()?;
        Some(Candidate {
            id,
            track: self.into_metadata()?,
        })
    }
}

/// Spotify Web API client.
pub struct SpotifyApi {
    config: SpotifyConfig,
}

impl SpotifyApi {
    pub fn new(config: SpotifyConfig) -> Self {
        Self { config }
    }

    /// Requests a new access token using the client credentials grant.
    async fn get_access_token(&self) -> ConvertResult<String> {
        // Basic auth with client_id:client_secret.
        let auth = BASE64_STANDARD.encode(format!(
            "{}:{}",
            self.config.client_id, self.config.client_secret
        ));

        let params = [("grant_type", "client_credentials")];
        let response = HTTP_CLIENT
            .post(format!("{}/api/token", self.config.accounts_url))
            .header(header::AUTHORIZATION, format!("Basic {}", auth))
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                ConvertError::Upstream(format!("Failed to request Spotify token: {}", e))
            })?;

        let body = success_body(response, Service::Spotify).await?;
        let token: SpotifyToken = decode(&body, Service::Spotify)?;
        debug!("Obtained Spotify access token");

        Ok(token.access_token)
    }
}

#[async_trait]
impl MusicService for SpotifyApi {
    async fn fetch_track(&self, id: &str) -> ConvertResult<TrackMetadata> {
        let token = self.get_access_token().await?;
        let url = format!("{}/v1/tracks/{}", self.config.api_url, id);
        debug!(%url, "Fetching Spotify track");

        let response = HTTP_CLIENT
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                ConvertError::Upstream(format!("Failed to request Spotify track: {}", e))
            })?;

        let Some(body) = lookup_body(response, Service::Spotify).await? else {
            return Err(ConvertError::TrackNotFound(Service::Spotify));
        };

        decode::<SpotifyTrack>(&body, Service::Spotify)?
            .into_metadata()
            .ok_or(ConvertError::TrackNotFound(Service::Spotify))
    }

    async fn search(&self, query: &str, limit: usize) -> ConvertResult<Vec<Candidate>> {
        let token = self.get_access_token().await?;
        let limit = limit.to_string();
        debug!(%query, "Searching Spotify");

        let response = HTTP_CLIENT
            .get(format!("{}/v1/search", self.config.api_url))
            .bearer_auth(token)
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| ConvertError::Upstream(format!("Failed to search Spotify: {}", e)))?;

        let body = success_body(response, Service::Spotify).await?;
        let results: SpotifySearchResponse = decode(&body, Service::Spotify)?;

        let items = results.tracks.items.unwrap_or_default();

        Ok(decode_items::<SpotifyTrack>(items, Service::Spotify)
            .into_iter()
            .filter_map(SpotifyTrack::into_candidate)
            .collect())
    }
}
