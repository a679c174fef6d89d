//! Row structs mapping table rows to the core entities.
//!
//! Each submodule contains a `FromRow` struct mirroring its table and a
//! conversion into the `lineup-core` entity. Conversions that decode a
//! stored enum string are fallible (`TryFrom`), the rest are plain `From`.

pub mod audit;
pub mod booking;
pub mod customer;
pub mod queue_entry;
pub mod service_line;
pub mod shop;
