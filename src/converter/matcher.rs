//! Builds search queries and picks the matching search result.

use super::track::{Candidate, TrackMetadata};

/// Maximum number of search results requested from the target service.
pub const SEARCH_LIMIT: usize = 5;

/// Builds the search text for a track: title and artist, with every character
/// outside `[A-Za-z0-9 ]` removed.
pub fn search_query(track: &TrackMetadata) -> String {
    format!("{} {}", track.title, track.artist)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}

/// Returns the first candidate whose title and artist equal the source's
/// (ignoring case) and whose duration lies strictly within 10% of the source duration.
pub fn select_match<'a>(
    source: &TrackMetadata,
    candidates: &'a [Candidate],
) -> Option<&'a Candidate> {
    let title = source.title.to_lowercase();
    let artist = source.artist.to_lowercase();

    candidates.iter().find(|candidate| {
        candidate.track.title.to_lowercase() == title
            && candidate.track.artist.to_lowercase() == artist
            && within_tolerance(source.duration_ms, candidate.track.duration_ms)
    })
}

/// `|source - other| < 0.10 * source`, in integer arithmetic.
fn within_tolerance(source_ms: u64, other_ms: u64) -> bool {
    u128::from(source_ms.abs_diff(other_ms)) * 10 < u128::from(source_ms)
}
