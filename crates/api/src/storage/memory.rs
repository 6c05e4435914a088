// In-memory storage implementation for dev mode
// Decision: Use parking_lot for thread-safe access
// Decision: UUIDs generated via uuid v7 (time-ordered), same as PostgreSQL
//
// Provides the same ordering semantics as the PostgreSQL store, allowing the
// service to run without a database for development and tests.

use async_trait::async_trait;
use chrono::Utc;
use eventbook_core::{Event, EventStore, NewEvent, Result};
use parking_lot::RwLock;
use uuid::Uuid;

/// In-memory database for dev mode
/// All data is stored in memory and lost on restart
#[derive(Default)]
pub struct InMemoryDatabase {
    events: RwLock<Vec<Event>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

#[async_trait]
impl EventStore for InMemoryDatabase {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn insert(&self, event: NewEvent) -> Result<Event> {
        let event = event.into_event(Uuid::now_v7(), Utc::now());
        self.events.write().push(event.clone());
        Ok(event)
    }

    async fn list_all(&self) -> Result<Vec<Event>> {
        let mut result: Vec<Event> = self.events.read().clone();
        result.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(result)
    }
}
