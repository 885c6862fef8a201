//! Chat-completion style provider adapter.
//!
//! This module provides the [`ChatCompletionProvider`] which implements
//! the [`TextProvider`](crosstalk_core::provider::TextProvider) trait for
//! OpenAI-style `/chat/completions` endpoints.

pub mod client;
pub mod types;

pub use client::ChatCompletionProvider;
