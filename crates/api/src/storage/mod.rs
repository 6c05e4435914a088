// Storage layer for Eventbook
// Decision: Support both PostgreSQL (production) and in-memory (dev mode)
//
// Both backends implement the core EventStore trait:
// - Database: PostgreSQL via sqlx
// - InMemoryDatabase: parking_lot-guarded vector, for dev mode and tests

pub mod memory;
pub mod models;
pub mod repositories;

pub use memory::InMemoryDatabase;
pub use models::EventRow;
pub use repositories::Database;
