//! Request handlers.

use std::any::Any;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::api::AppState;
use crate::api::response::{ConversionResponse, INTERNAL_ERROR_MESSAGE};
use crate::converter::ConvertError;
use crate::converter::track::Service;

/// Body of `POST /api/convert`.
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    /// Track link on the source service.
    pub link: Option<String>,
    /// Name of the target service.
    pub target: Option<String>,
}

impl ConvertRequest {
    /// Checks that both fields are present and that `target` names a known service.
    fn validate(self) -> Result<(String, Service), ConvertError> {
        let link = self
            .link
            .map(|link| link.trim().to_string())
            .filter(|link| !link.is_empty());
        let target = self
            .target
            .map(|target| target.trim().to_string())
            .filter(|target| !target.is_empty());

        let (Some(link), Some(target)) = (link, target) else {
            return Err(ConvertError::InvalidRequest(
                "Both link and target are required".to_string(),
            ));
        };

        let target = target.parse().map_err(ConvertError::InvalidRequest)?;
        Ok((link, target))
    }
}

/// Serves the conversion form.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Converts a track link into the equivalent link on the requested service.
pub async fn convert(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConversionResponse>, ConvertError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(%rejection, "Rejected request body");
        ConvertError::InvalidRequest("Request body must be JSON with link and target".to_string())
    })?;

    let (link, target) = request.validate()?;
    let url = state.converter.convert(&link, target).await?;
    info!(%url, "Conversion succeeded");

    Ok(Json(ConversionResponse::converted(url)))
}

/// Fallback for every method other than POST on `/api/convert`.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(ConversionResponse::failed("Method not allowed")),
    )
        .into_response()
}

/// Turns a handler panic into a generic JSON 500 without exposing the panic payload.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(%detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ConversionResponse::failed(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}
