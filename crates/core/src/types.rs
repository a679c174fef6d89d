//! Shared primitive types.

/// All entity identifiers are random UUIDs, generated at creation time.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
