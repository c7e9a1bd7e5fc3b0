//! Request-scoped track types shared by every step of the conversion.

use std::fmt;
use std::str::FromStr;

/// A supported streaming service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Spotify,
    Qobuz,
}

impl Service {
    /// Every supported service, in display order.
    pub const ALL: [Service; 2] = [Service::Spotify, Service::Qobuz];

    /// Identifier used in requests (`"spotify"`, `"qobuz"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Spotify => "spotify",
            Service::Qobuz => "qobuz",
        }
    }

    /// Canonical public URL of a track on this service.
    pub fn track_url(&self, id: &str) -> String {
        match self {
            Service::Spotify => format!("https://open.spotify.com/track/{}", id),
            Service::Qobuz => format!("https://open.qobuz.com/track/{}", id),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::Spotify => f.write_str("Spotify"),
            Service::Qobuz => f.write_str("Qobuz"),
        }
    }
}

impl FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|service| service.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unsupported target service: {}", s))
    }
}

/// Identifies one track on one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRef {
    pub service: Service,
    pub id: String,
}

/// Service-agnostic description of a track.
///
/// Only built through [`TrackMetadata::new`], so `duration_ms` is never zero and
/// neither `title` nor `artist` is blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMetadata {
    pub title: String,
    pub artist: String,
    pub duration_ms: u64,
}

impl TrackMetadata {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_ms: u64,
    ) -> Option<Self> {
        let title = title.into();
        let artist = artist.into();

        if duration_ms == 0 || title.trim().is_empty() || artist.trim().is_empty() {
            return None;
        }

        Some(Self {
            title,
            artist,
            duration_ms,
        })
    }
}

/// A search hit on the target service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Service-specific track identifier.
    pub id: String,
    pub track: TrackMetadata,
}
