// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use eventbook_core::Event;
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `events` table
#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: Uuid,
    #[sqlx(rename = "type")]
    pub event_type: String,
    pub description: String,
    pub budget: f64,
    pub number_of_persons: i32,
    pub date: String,
    pub payload: sqlx::types::JsonValue,
    pub created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            event_type: row.event_type,
            description: row.description,
            budget: row.budget,
            number_of_persons: row.number_of_persons,
            date: row.date,
            payload: row.payload,
            created_at: row.created_at,
        }
    }
}
