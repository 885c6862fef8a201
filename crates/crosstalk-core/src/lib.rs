//! Decision logic for the Crosstalk relay.
//!
//! This crate defines the provider "port" ([`provider::TextProvider`]) that
//! the infrastructure layer implements, plus everything with real decision
//! logic: eligibility and priority ordering ([`registry`]), per-client
//! admission control ([`limiter`]), context windowing ([`context`]), and the
//! failover orchestrator ([`relay`]). It depends only on `crosstalk-types`
//! -- never on any HTTP or IO crate.

pub mod box_provider;
pub mod context;
pub mod limiter;
pub mod provider;
pub mod registry;
pub mod relay;
