//! HTTP layer for the Crosstalk relay.
//!
//! Axum-based API exposing the single chat endpoint and the health
//! surface, with CORS and request tracing middleware.

pub mod error;
pub mod handlers;
pub mod router;
