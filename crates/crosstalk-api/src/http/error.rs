//! Application error type mapping to HTTP status codes and body format.
//!
//! Every failure body has the shape `{ "error": code, "message": text }`;
//! aggregate provider failures additionally carry `providers_tried`.
//! Upstream error detail never crosses this boundary -- only the generic
//! per-category messages from [`RelayError`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crosstalk_types::error::RelayError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// A classified relay failure.
    Relay(RelayError),
    /// Unexpected internal fault; rendered as a generic 500.
    Internal(String),
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        AppError::Relay(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, providers_tried) = match self {
            AppError::Relay(err) => {
                let message = err.to_string();
                match err {
                    RelayError::RateLimited => {
                        (StatusCode::TOO_MANY_REQUESTS, "rate_limited", message, None)
                    }
                    RelayError::InvalidMessage(_) => {
                        (StatusCode::BAD_REQUEST, "invalid_message", message, None)
                    }
                    RelayError::NoProviders => {
                        (StatusCode::SERVICE_UNAVAILABLE, "no_providers", message, None)
                    }
                    RelayError::AllProvidersFailed { attempted } => (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "all_providers_failed",
                        message,
                        Some(attempted),
                    ),
                }
            }
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An unexpected error occurred.".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": code,
            "message": message,
        });
        if let Some(providers) = providers_tried {
            body["providers_tried"] = json!(providers);
        }

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_rate_limited_maps_to_429() {
        let response = AppError::from(RelayError::RateLimited).into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let body = body_json(response).await;
        assert_eq!(body["error"], "rate_limited");
        assert!(body.get("providers_tried").is_none());
    }

    #[tokio::test]
    async fn test_invalid_message_maps_to_400() {
        let response =
            AppError::from(RelayError::InvalidMessage("Message must not be empty.".into()))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid_message");
        assert_eq!(body["message"], "Message must not be empty.");
    }

    #[tokio::test]
    async fn test_no_providers_maps_to_503_without_list() {
        let response = AppError::from(RelayError::NoProviders).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(response).await;
        assert_eq!(body["error"], "no_providers");
        assert!(body.get("providers_tried").is_none());
    }

    #[tokio::test]
    async fn test_all_failed_maps_to_503_with_names_only() {
        let response = AppError::from(RelayError::AllProvidersFailed {
            attempted: vec!["primary".to_string(), "secondary".to_string()],
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(response).await;
        assert_eq!(body["error"], "all_providers_failed");
        assert_eq!(body["providers_tried"], serde_json::json!(["primary", "secondary"]));
        // The message is the generic retry-later text, no upstream detail.
        assert!(body["message"].as_str().unwrap().contains("try again later"));
    }

    #[tokio::test]
    async fn test_internal_maps_to_500_with_generic_message() {
        let response = AppError::Internal("secret detail".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert!(!body["message"].as_str().unwrap().contains("secret detail"));
    }
}
