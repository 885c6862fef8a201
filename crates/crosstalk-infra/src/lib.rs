//! Infrastructure layer for Crosstalk.
//!
//! Contains the concrete implementations of the `TextProvider` port defined
//! in `crosstalk-core` -- one reqwest-based adapter per provider schema
//! family -- plus TOML/environment configuration loading.

pub mod config;
pub mod llm;
