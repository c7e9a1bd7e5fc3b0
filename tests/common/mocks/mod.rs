//! Wiremock endpoints for the Spotify and Qobuz APIs

use serde_json::Value;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures;

pub async fn spotify_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::spotify_token()))
        .mount(server)
        .await;
}

pub async fn spotify_track(server: &MockServer, id: &str, status: u16, body: Value) {
    let bearer = format!("Bearer {}", fixtures::SPOTIFY_TOKEN);

    Mock::given(method("GET"))
        .and(path(format!("/v1/tracks/{}", id)))
        .and(header("Authorization", bearer.as_str()))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn spotify_search(server: &MockServer, query: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", query))
        .and(query_param("type", "track"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn qobuz_track(server: &MockServer, id: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path("/track/get"))
        .and(query_param("app_id", fixtures::QOBUZ_APP_ID))
        .and(query_param("track_id", id))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn qobuz_search(server: &MockServer, query: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path("/catalog/search"))
        .and(query_param("app_id", fixtures::QOBUZ_APP_ID))
        .and(query_param("query", query))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}
