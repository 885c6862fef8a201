//! Shared domain types for Crosstalk.
//!
//! This crate contains the types used across the relay: conversation turns,
//! chat request/reply shapes, provider configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror, secrecy.

pub mod chat;
pub mod error;
pub mod provider;
