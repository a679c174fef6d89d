//! HTTP boundary for the lineup platform.
//!
//! Everything here is a thin wrapper: handlers deserialize input, call a core
//! service, and map [`lineup_core::error::CoreError`] onto HTTP statuses. The
//! domain rules (booking lifecycle, audit contract, queue semantics) live in
//! `lineup-core`.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
