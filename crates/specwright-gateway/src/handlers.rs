// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the conversion REST API.
//!
//! Handles POST /api/convert, GET/DELETE /api/history, POST /api/archive,
//! and GET /health.

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use specwright_archive::{bundle_archive, split_generated_text};
use specwright_core::StorageAdapter;
use specwright_core::types::{ConversionRequest, TemplateKind, deserialize_template};

use crate::server::GatewayState;

/// Opaque message returned on any conversion failure. No structured
/// detail leaks to the caller.
const PROCESSING_FAILED: &str = "AI processing failed";

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// Query parameters for DELETE /api/history.
#[derive(Debug, Deserialize)]
pub struct HistoryDeleteParams {
    /// Record to delete; absent means delete all of the caller's records.
    #[serde(default)]
    pub id: Option<String>,
}

/// Request body for POST /api/archive.
#[derive(Debug, Deserialize)]
pub struct ArchiveRequest {
    /// The generated text to split and package.
    pub code: String,
    /// Template the text was generated with; defaults to `pom`.
    #[serde(default, deserialize_with = "deserialize_template")]
    pub template: TemplateKind,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Seconds since the server started.
    pub uptime_secs: u64,
}

fn processing_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: PROCESSING_FAILED.to_string(),
        }),
    )
        .into_response()
}

/// POST /api/convert
///
/// Runs one conversion. Identity is resolved from the bearer token when
/// present but is not required; anonymous conversions succeed and skip
/// history. Any failure, including a malformed body, collapses to an
/// opaque 500.
pub async fn post_convert(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "rejecting malformed conversion request");
            return processing_failed();
        }
    };

    let user = state.auth.resolve_user(&headers);

    match state.pipeline.convert(&request, user.as_deref()).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => {
            error!(error = %e, "conversion failed");
            processing_failed()
        }
    }
}

/// GET /api/history
///
/// Returns the caller's records, newest first. 401 without an identity.
pub async fn get_history(State(state): State<GatewayState>, headers: HeaderMap) -> Response {
    let Some(user) = state.auth.resolve_user(&headers) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    match state.storage.list_records_for_user(&user).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => {
            error!(error = %e, "history read failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "history unavailable".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// DELETE /api/history?id=<id>
///
/// Deletes one owned record when `id` is present, else all of the caller's
/// records. Always 204 on success, even when zero rows matched; 401
/// without an identity.
pub async fn delete_history(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    Query(params): Query<HistoryDeleteParams>,
) -> Response {
    let Some(user) = state.auth.resolve_user(&headers) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    let result = match params.id {
        Some(ref id) => state.storage.delete_record(&user, id).await,
        None => state.storage.delete_all_for_user(&user).await,
    };

    match result {
        Ok(_affected) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!(error = %e, "history delete failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "history unavailable".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// POST /api/archive
///
/// Splits the generated text into project files and returns them as a
/// downloadable zip. Splitting never fails; only packaging errors surface.
pub async fn post_archive(
    State(_state): State<GatewayState>,
    Json(request): Json<ArchiveRequest>,
) -> Response {
    let files = split_generated_text(&request.code, request.template);
    match bundle_archive(&files) {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/zip"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"playwright-automation.zip\"",
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "archive packaging failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "archive packaging failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health
///
/// Unauthenticated liveness endpoint.
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.health.start_time.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_request_deserializes_with_defaults() {
        let json = r#"{"code": "test('x', ...)"}"#;
        let req: ArchiveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.code, "test('x', ...)");
        assert_eq!(req.template, TemplateKind::Pom);
    }

    #[test]
    fn archive_request_accepts_step_defs_template() {
        let json = r#"{"code": "x", "template": "step-defs"}"#;
        let req: ArchiveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.template, TemplateKind::StepDefs);
    }

    #[test]
    fn error_response_serializes() {
        let resp = ErrorResponse {
            error: PROCESSING_FAILED.to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("AI processing failed"));
    }

    #[test]
    fn delete_params_id_is_optional() {
        let params: HistoryDeleteParams = serde_json::from_str("{}").unwrap();
        assert!(params.id.is_none());
        let params: HistoryDeleteParams =
            serde_json::from_str(r#"{"id": "r1"}"#).unwrap();
        assert_eq!(params.id.as_deref(), Some("r1"));
    }
}
