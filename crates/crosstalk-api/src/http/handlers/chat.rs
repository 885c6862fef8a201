//! Relay chat endpoint.
//!
//! POST /api/chat
//!
//! Accepts `{ "message": string, "history": [{role, content, timestamp}] }`
//! and returns the normalized reply of the first provider that produces an
//! acceptable result. The caller's peer IP is the rate-limit identity.
//!
//! Body extraction is handled manually so that malformed JSON and wrongly
//! typed fields produce the same 400 envelope as an empty or oversized
//! message, instead of axum's default rejection body.

use std::net::SocketAddr;

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::Json;

use crosstalk_types::chat::{ChatReply, ChatRequest};
use crosstalk_types::error::RelayError;

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/chat -- relay one chat request through the failover chain.
pub async fn relay_chat(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(value) = body.map_err(|_| invalid_body())?;
    let request: ChatRequest = serde_json::from_value(value).map_err(|_| invalid_body())?;

    let client = addr.ip().to_string();
    let reply = state.relay.handle(&client, &request).await?;
    Ok(Json(reply))
}

fn invalid_body() -> AppError {
    AppError::Relay(RelayError::InvalidMessage(
        "Invalid request body.".to_string(),
    ))
}
