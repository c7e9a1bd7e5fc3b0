//! Reads credentials and endpoint overrides from the environment.
//! `main` loads `.env` through `dotenv` before calling [`Config::from_env`].

use std::env;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com";
const DEFAULT_SPOTIFY_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
const DEFAULT_QOBUZ_API_URL: &str = "https://www.qobuz.com/api.json/0.2";

/// Errors raised while building the configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is absent or blank.
    #[error("{0} not set")]
    Missing(&'static str),
}

/// Spotify client-credentials settings.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Base URL of the Web API (`/v1/...` is appended).
    pub api_url: String,
    /// Base URL of the accounts service (`/api/token` is appended).
    pub accounts_url: String,
}

/// Qobuz application settings.
#[derive(Debug, Clone)]
pub struct QobuzConfig {
    pub app_id: String,
    pub api_url: String,
}

/// Complete process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on.
    pub bind_addr: String,
    pub spotify: SpotifyConfig,
    pub qobuz: QobuzConfig,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));
        let optional = |key: &str, default: &str| {
            get(key)
                .map(|value| value.trim_end_matches('/').to_string())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            bind_addr: optional("BIND_ADDR", DEFAULT_BIND_ADDR),
            spotify: SpotifyConfig {
                client_id: required("SPOTIFY_CLIENT_ID")?,
                client_secret: required("SPOTIFY_CLIENT_SECRET")?,
                api_url: optional("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL),
                accounts_url: optional("SPOTIFY_ACCOUNTS_URL", DEFAULT_SPOTIFY_ACCOUNTS_URL),
            },
            qobuz: QobuzConfig {
                app_id: required("QOBUZ_APP_ID")?,
                api_url: optional("QOBUZ_API_URL", DEFAULT_QOBUZ_API_URL),
            },
        })
    }
}
