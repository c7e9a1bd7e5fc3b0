//! Response body shared by every outcome of `/api/convert`, and the mapping from
//! [`ConvertError`] to HTTP status and public message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::converter::ConvertError;

/// Message returned for failures whose details stay server-side.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong while converting the link";

/// Outcome of a conversion request. Exactly one of `url`/`message` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ConversionResponse {
    pub fn converted(url: String) -> Self {
        Self {
            success: true,
            url: Some(url),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            url: None,
            message: Some(message.into()),
        }
    }
}

impl ConvertError {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ConvertError::InvalidRequest(_)
            | ConvertError::UnsupportedLink
            | ConvertError::SameServiceConversion => StatusCode::BAD_REQUEST,
            ConvertError::TrackNotFound(_) | ConvertError::NoMatch => StatusCode::NOT_FOUND,
            ConvertError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the caller. Upstream details are never included.
    pub fn public_message(&self) -> String {
        match self {
            ConvertError::Upstream(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ConvertError {
    fn into_response(self) -> Response {
        match &self {
            ConvertError::Upstream(detail) => error!(%detail, "Conversion failed upstream"),
            other => warn!(error = %other, "Conversion rejected"),
        }

        let body = Json(ConversionResponse::failed(self.public_message()));
        (self.status_code(), body).into_response()
    }
}
