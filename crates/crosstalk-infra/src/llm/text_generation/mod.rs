//! Generic text-generation style provider adapter.
//!
//! This module provides the [`TextGenerationProvider`] which implements
//! the [`TextProvider`](crosstalk_core::provider::TextProvider) trait for
//! bare `inputs` / `generated_text` endpoints.

pub mod client;
pub mod types;

pub use client::TextGenerationProvider;
