// Core traits for pluggable backends
//
// The EventStore trait allows the service to run against different backends:
// - PostgreSQL for production
// - In-memory for dev mode and testing

use async_trait::async_trait;

use crate::error::Result;
use crate::event::{Event, NewEvent};

// ============================================================================
// EventStore - Durable persistence of events
// ============================================================================

/// Trait for persisting and listing events
///
/// Each operation is a single atomic unit; implementations never return
/// partial results.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Create the backing table if it does not exist. Safe to call repeatedly.
    async fn ensure_schema(&self) -> Result<()>;

    /// Assign a fresh id and creation timestamp, then persist the event
    async fn insert(&self, event: NewEvent) -> Result<Event>;

    /// Load every event, most recent first
    async fn list_all(&self) -> Result<Vec<Event>>;
}
