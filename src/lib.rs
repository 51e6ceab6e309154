//! Dutch Blitz - Multiplayer Score Tracking
//!
//! This crate keeps live Dutch Blitz game sessions in memory: rosters,
//! readiness, per-round scores and cumulative totals, served over HTTP.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
