//! Domain core for the lineup platform: walk-in and appointment queues for
//! service shops.
//!
//! This crate owns the entities, the repository traits, and the service
//! components (booking lifecycle, queue engine, shop registry, audit recorder,
//! auth gateway, customer directory). It has no knowledge of HTTP or of the
//! storage backend -- services depend only on the `*Repo` traits, which the
//! `lineup-db` crate implements against PostgreSQL and [`memory`] implements
//! in-process for tests.

pub mod audit;
pub mod auth;
pub mod booking;
pub mod customer;
pub mod error;
pub mod memory;
pub mod queue;
pub mod shop;
pub mod types;
