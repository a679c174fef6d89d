//! HTTP handlers, one module per resource.

pub mod audits;
pub mod auth;
pub mod bookings;
pub mod customers;
pub mod health;
pub mod queue_entries;
pub mod shops;
