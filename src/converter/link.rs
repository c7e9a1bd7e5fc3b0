//! Recognises track links and extracts the service and track id.

use regex::Regex;
use std::sync::LazyLock;

use super::track::{Service, TrackRef};
use super::{ConvertError, ConvertResult};

/// Regex to match and capture Spotify track URLs. Ids are base62.
static SPOTIFY_TRACK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?open\.spotify\.com/track/([a-zA-Z0-9]+)([/?#].*)?$").unwrap()
});

/// Regex to match and capture Qobuz track URLs. Ids are numeric.
static QOBUZ_TRACK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?open\.qobuz\.com/track/([0-9]+)([/?#].*)?$").unwrap()
});

/// Parses a track link into a [`TrackRef`].
///
/// Anything other than a Spotify or Qobuz track link fails with
/// [`ConvertError::UnsupportedLink`].
pub fn parse_link(link: &str) -> ConvertResult<TrackRef> {
    let track = if let Some(id) = capture_id(&SPOTIFY_TRACK_REGEX, link) {
        TrackRef {
            service: Service::Spotify,
            id,
        }
    } else if let Some(id) = capture_id(&QOBUZ_TRACK_REGEX, link) {
        TrackRef {
            service: Service::Qobuz,
            id,
        }
    } else {
        return Err(ConvertError::UnsupportedLink);
    };

    Ok(track)
}

fn capture_id(regex: &Regex, link: &str) -> Option<String> {
    regex
        .captures(link)
        .and_then(|cap| cap.get(2))
        .map(|m| m.as_str().to_string())
}
