// Event domain types
//
// These types represent the Event entity and its creation input.
// Used by both storage implementations and the HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Event - a planned occasion with budget, headcount, date and payload.
/// Events are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier for the event, generated by the store.
    pub id: Uuid,
    /// Kind of event (e.g. "Conference", "Wedding").
    #[serde(rename = "type")]
    #[cfg_attr(feature = "openapi", schema(example = "Conference"))]
    pub event_type: String,
    /// Free-form description.
    pub description: String,
    /// Planned budget.
    pub budget: f64,
    /// Expected headcount.
    pub number_of_persons: i32,
    /// Date of the event, kept as opaque text.
    #[cfg_attr(feature = "openapi", schema(example = "2024-12-25"))]
    pub date: String,
    /// Arbitrary client-supplied JSON document, returned verbatim.
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub payload: serde_json::Value,
    /// Timestamp when the event was created, generated by the store.
    pub created_at: DateTime<Utc>,
}

/// Input for creating an event.
/// Carries no id or timestamp; those are always assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub event_type: String,
    pub description: String,
    pub budget: f64,
    pub number_of_persons: i32,
    pub date: String,
    pub payload: serde_json::Value,
}

impl NewEvent {
    /// Attach server-generated identity to this input.
    pub fn into_event(self, id: Uuid, created_at: DateTime<Utc>) -> Event {
        Event {
            id,
            event_type: self.event_type,
            description: self.description,
            budget: self.budget,
            number_of_persons: self.number_of_persons,
            date: self.date,
            payload: self.payload,
            created_at,
        }
    }
}
