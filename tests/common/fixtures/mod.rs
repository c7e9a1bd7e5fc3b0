//! Test fixtures for tunebridge
//! Credentials and provider payloads shaped like the real APIs.

use serde_json::{Value, json};

pub const SPOTIFY_CLIENT_ID: &str = "fixture-client";
pub const SPOTIFY_CLIENT_SECRET: &str = "fixture-secret";
pub const SPOTIFY_TOKEN: &str = "fixture-token";
pub const QOBUZ_APP_ID: &str = "123456789";

pub const SPOTIFY_LINK: &str = "https://open.spotify.com/track/abc123";
pub const QOBUZ_LINK: &str = "https://open.qobuz.com/track/98765";

pub fn spotify_token() -> Value {
    json!({
        "access_token": SPOTIFY_TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600
    })
}

pub fn spotify_track(id: &str, name: &str, artist: &str, duration_ms: u64) -> Value {
    json!({
        "id": id,
        "name": name,
        "artists": [{ "id": "artist", "name": artist }],
        "duration_ms": duration_ms,
        "album": { "name": "Album", "images": [] },
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{}", id) }
    })
}

pub fn spotify_search(items: Vec<Value>) -> Value {
    let total = items.len();
    json!({ "tracks": { "limit": 5, "offset": 0, "total": total, "items": items } })
}

pub fn qobuz_track(id: u64, title: &str, performer: &str, duration_secs: u64) -> Value {
    json!({
        "id": id,
        "title": title,
        "performer": { "id": 1, "name": performer },
        "duration": duration_secs,
        "album": { "title": "Album" }
    })
}

pub fn qobuz_search(items: Vec<Value>) -> Value {
    let total = items.len();
    json!({ "tracks": { "limit": 5, "offset": 0, "total": total, "items": items } })
}
