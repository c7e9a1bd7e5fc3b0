//! The conversion pipeline: parse the link, fetch source metadata, search the
//! target service, pick the matching result and build its URL.

/// Track link recognition.
pub mod link;
/// Search query construction and match selection.
pub mod matcher;
/// Track types shared across the pipeline.
pub mod track;

use thiserror::Error;
use tracing::{debug, info};

use crate::providers::Providers;
use track::Service;

/// Errors that can end a conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Missing or malformed request input.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Only Spotify and Qobuz track links are supported")]
    UnsupportedLink,

    #[error("Source and target cannot be the same")]
    SameServiceConversion,

    /// The source lookup or the target search produced nothing usable.
    #[error("Track not found on {0}")]
    TrackNotFound(Service),

    #[error("No exact match found. Check title, artist, or duration")]
    NoMatch,

    /// Transport failure, unexpected status or undecodable payload from a provider.
    #[error("External API error: {0}")]
    Upstream(String),
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Runs conversions against a fixed set of providers. Holds no per-request state.
pub struct Converter {
    providers: Providers,
}

impl Converter {
    pub fn new(providers: Providers) -> Self {
        Self { providers }
    }

    /// Converts `link` into the equivalent track URL on `target`.
    pub async fn convert(&self, link: &str, target: Service) -> ConvertResult<String> {
        let source = link::parse_link(link)?;
        if source.service == target {
            return Err(ConvertError::SameServiceConversion);
        }

        info!(
            source = %source.service,
            id = %source.id,
            target = %target,
            "Converting track"
        );

        let metadata = self
            .providers
            .get(source.service)
            .fetch_track(&source.id)
            .await?;
        debug!(?metadata, "Fetched source metadata");

        let query = matcher::search_query(&metadata);
        debug!(%query, "Searching {}", target);
        let candidates = self
            .providers
            .get(target)
            .search(&query, matcher::SEARCH_LIMIT)
            .await?;

        if candidates.is_empty() {
            return Err(ConvertError::TrackNotFound(target));
        }

        let Some(matched) = matcher::select_match(&metadata, &candidates) else {
            return Err(ConvertError::NoMatch);
        };

        Ok(target.track_url(&matched.id))
    }
}
