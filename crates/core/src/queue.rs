//! Queue entries: a customer's position within a service line, independent of
//! formal bookings.
//!
//! Entries are scoped to a service line. Unlike bookings, creation persists
//! the entry exactly as supplied -- no default status, no stamped join time,
//! and no audit trail. That asymmetry mirrors the walk-in flow, where the
//! client owns the join timestamp.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// One position in a service line's walk-in queue.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntry {
    pub id: EntityId,
    pub service_line_id: EntityId,
    pub user_id: String,
    pub user_name: String,
    pub joined_at: Timestamp,
    pub status: String,
    pub estimated_minutes: i32,
}

/// Fields for joining a queue. All of them are caller-supplied.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQueueEntry {
    pub service_line_id: EntityId,
    pub user_id: String,
    pub user_name: String,
    pub joined_at: Timestamp,
    pub status: String,
    pub estimated_minutes: i32,
}

/// The only two fields mutable after creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQueueEntry {
    pub status: String,
    pub estimated_minutes: i32,
}

// ---------------------------------------------------------------------------
// Repository trait
// ---------------------------------------------------------------------------

/// Persistence capability for queue entries.
#[async_trait::async_trait]
pub trait QueueEntryRepo: Send + Sync {
    async fn save(&self, entry: QueueEntry) -> CoreResult<QueueEntry>;
    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<QueueEntry>>;
    async fn find_all(&self) -> CoreResult<Vec<QueueEntry>>;
    async fn find_by_service_line(&self, service_line_id: EntityId)
        -> CoreResult<Vec<QueueEntry>>;
    async fn find_by_user(&self, user_id: &str) -> CoreResult<Vec<QueueEntry>>;
    async fn delete_by_id(&self, id: EntityId) -> CoreResult<()>;
    async fn delete_by_service_line(&self, service_line_id: EntityId) -> CoreResult<()>;
}

// ---------------------------------------------------------------------------
// QueueEngine
// ---------------------------------------------------------------------------

/// Manages queue entries scoped to service lines.
///
/// Finders return entries in insertion order, which doubles as FIFO service
/// order for the walk-in queue.
pub struct QueueEngine {
    entries: Arc<dyn QueueEntryRepo>,
}

impl QueueEngine {
    pub fn new(entries: Arc<dyn QueueEntryRepo>) -> Self {
        Self { entries }
    }

    pub async fn list(&self) -> CoreResult<Vec<QueueEntry>> {
        self.entries.find_all().await
    }

    pub async fn get(&self, id: EntityId) -> CoreResult<Option<QueueEntry>> {
        self.entries.find_by_id(id).await
    }

    pub async fn entries_for_service_line(
        &self,
        service_line_id: EntityId,
    ) -> CoreResult<Vec<QueueEntry>> {
        self.entries.find_by_service_line(service_line_id).await
    }

    pub async fn entries_for_user(&self, user_id: &str) -> CoreResult<Vec<QueueEntry>> {
        self.entries.find_by_user(user_id).await
    }

    /// Persist a new entry exactly as supplied.
    pub async fn join(&self, input: CreateQueueEntry) -> CoreResult<QueueEntry> {
        let entry = QueueEntry {
            id: EntityId::new_v4(),
            service_line_id: input.service_line_id,
            user_id: input.user_id,
            user_name: input.user_name,
            joined_at: input.joined_at,
            status: input.status,
            estimated_minutes: input.estimated_minutes,
        };
        self.entries.save(entry).await
    }

    /// Mutate status and estimated wait of an existing entry; every other
    /// field is immutable after creation. Returns `None` when the id is
    /// unknown. No audit record is produced either way.
    pub async fn update(
        &self,
        id: EntityId,
        details: UpdateQueueEntry,
    ) -> CoreResult<Option<QueueEntry>> {
        let Some(mut entry) = self.entries.find_by_id(id).await? else {
            return Ok(None);
        };
        entry.status = details.status;
        entry.estimated_minutes = details.estimated_minutes;
        self.entries.save(entry).await.map(Some)
    }

    /// Remove an entry. Deleting an absent id is a no-op.
    pub async fn leave(&self, id: EntityId) -> CoreResult<()> {
        self.entries.delete_by_id(id).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryQueueEntryRepo;
    use chrono::Utc;

    fn engine() -> QueueEngine {
        QueueEngine::new(Arc::new(MemoryQueueEntryRepo::default()))
    }

    fn entry(service_line_id: EntityId, user_id: &str) -> CreateQueueEntry {
        CreateQueueEntry {
            service_line_id,
            user_id: user_id.into(),
            user_name: format!("user {user_id}"),
            joined_at: Utc::now(),
            status: "waiting".into(),
            estimated_minutes: 12,
        }
    }

    #[tokio::test]
    async fn join_persists_entry_as_supplied() {
        let engine = engine();
        let line = EntityId::new_v4();
        let joined_at = Utc::now();

        let mut input = entry(line, "u1");
        input.joined_at = joined_at;
        input.status = "serving".into();

        let saved = engine.join(input).await.unwrap();
        // No defaults applied: status and joined_at are exactly what the
        // caller supplied.
        assert_eq!(saved.status, "serving");
        assert_eq!(saved.joined_at, joined_at);
        assert_eq!(saved.estimated_minutes, 12);
    }

    #[tokio::test]
    async fn update_mutates_only_status_and_estimate() {
        let engine = engine();
        let line = EntityId::new_v4();
        let saved = engine.join(entry(line, "u1")).await.unwrap();

        let updated = engine
            .update(
                saved.id,
                UpdateQueueEntry {
                    status: "serving".into(),
                    estimated_minutes: 3,
                },
            )
            .await
            .unwrap()
            .expect("entry exists");

        assert_eq!(updated.status, "serving");
        assert_eq!(updated.estimated_minutes, 3);
        // Immutable fields untouched.
        assert_eq!(updated.user_id, saved.user_id);
        assert_eq!(updated.user_name, saved.user_name);
        assert_eq!(updated.joined_at, saved.joined_at);
        assert_eq!(updated.service_line_id, saved.service_line_id);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let engine = engine();
        let result = engine
            .update(
                EntityId::new_v4(),
                UpdateQueueEntry {
                    status: "serving".into(),
                    estimated_minutes: 1,
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn leave_is_idempotent() {
        let engine = engine();
        let line = EntityId::new_v4();
        let saved = engine.join(entry(line, "u1")).await.unwrap();

        engine.leave(saved.id).await.unwrap();
        // Second delete of the same id, and a delete of a never-seen id,
        // are both no-ops.
        engine.leave(saved.id).await.unwrap();
        engine.leave(EntityId::new_v4()).await.unwrap();

        assert!(engine.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn finders_scope_by_service_line_and_user_in_insertion_order() {
        let engine = engine();
        let line_a = EntityId::new_v4();
        let line_b = EntityId::new_v4();

        engine.join(entry(line_a, "u1")).await.unwrap();
        engine.join(entry(line_b, "u2")).await.unwrap();
        engine.join(entry(line_a, "u3")).await.unwrap();
        engine.join(entry(line_a, "u1")).await.unwrap();

        let for_line = engine.entries_for_service_line(line_a).await.unwrap();
        assert_eq!(for_line.len(), 3);
        assert_eq!(for_line[0].user_id, "u1");
        assert_eq!(for_line[1].user_id, "u3");
        assert_eq!(for_line[2].user_id, "u1");

        let for_user = engine.entries_for_user("u1").await.unwrap();
        assert_eq!(for_user.len(), 2);
    }
}
