// Event service
//
// Currently pure delegation to the store. Errors propagate unchanged so the
// HTTP layer stays the only place that maps failures to status codes.

use eventbook_core::{Event, EventStore, NewEvent, Result};
use std::sync::Arc;

pub struct EventService {
    store: Arc<dyn EventStore>,
}

impl EventService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Persist a new event and return it with its generated id and timestamp.
    pub async fn create_event(&self, event: NewEvent) -> Result<Event> {
        self.store.insert(event).await
    }

    /// All events, most recent first.
    pub async fn get_all_events(&self) -> Result<Vec<Event>> {
        self.store.list_all().await
    }
}
