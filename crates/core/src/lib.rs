// Event Booking Core
//
// This crate provides the DB-agnostic domain of the event booking service.
//
// Key design decisions:
// - Event is the only entity; NewEvent is the creation input without server-generated fields
// - Uses the EventStore trait for pluggable backends (PostgreSQL, in-memory)
// - Errors from stores are typed (StoreError) and propagate unchanged to the HTTP boundary

pub mod error;
pub mod event;
pub mod traits;

// Re-exports for convenience
pub use error::{Result, StoreError};
pub use event::{Event, NewEvent};
pub use traits::EventStore;
