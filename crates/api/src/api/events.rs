// Event HTTP routes

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use eventbook_core::{Event, NewEvent};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::common::{ErrorResponse, EventListResponse};
use super::validation::{
    canonical_payload, null_as_default, parse_json_body, validate_required_fields,
};
use crate::services::EventService;

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(service: Arc<EventService>) -> Self {
        Self { service }
    }
}

/// Request to create an event.
/// Absent or null string fields are treated as empty; absent or null numbers as zero.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// Kind of event. Required, non-empty.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    #[schema(example = "Conference")]
    pub event_type: String,
    /// Free-form description. Required, non-empty.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "Tech Conference 2024")]
    pub description: String,
    /// Planned budget.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = 5000)]
    pub budget: f64,
    /// Expected headcount.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = 100)]
    pub number_of_persons: i32,
    /// Date of the event as free text. Required, non-empty.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "2024-12-25")]
    pub date: String,
    /// Arbitrary JSON document stored verbatim.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/events", post(create_event).get(list_events))
        .with_state(state)
}

/// POST /events - Create a new event
#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created successfully", body = Event),
        (status = 400, description = "Invalid body or missing required fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Event>), (StatusCode, Json<ErrorResponse>)> {
    let req: CreateEventRequest = parse_json_body(&body)?;
    validate_required_fields(&req.event_type, &req.description, &req.date)?;
    let payload = canonical_payload(&req.payload)?;

    let input = NewEvent {
        event_type: req.event_type,
        description: req.description,
        budget: req.budget,
        number_of_persons: req.number_of_persons,
        date: req.date,
        payload,
    };

    let event = state.service.create_event(input).await.map_err(|e| {
        tracing::error!("Failed to create event: {}", e);
        ErrorResponse::new("Failed to create event").into_response(StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    tracing::info!(event_id = %event.id, event_type = %event.event_type, "Event created");
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /events - List all events, most recent first
#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "List of events", body = EventListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<EventListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let events = state.service.get_all_events().await.map_err(|e| {
        tracing::error!("Failed to fetch events: {}", e);
        ErrorResponse::new("Failed to fetch events").into_response(StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    Ok(Json(EventListResponse::from(events)))
}
