// OpenAPI document generation
//
// Used by the API server (for Swagger UI) and by the export-openapi binary.

use crate::api;
use crate::api::{ErrorResponse, EventListResponse};
use eventbook_core::Event;
use utoipa::OpenApi;

/// OpenAPI documentation for the Eventbook API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health,
        api::events::create_event,
        api::events::list_events,
    ),
    components(
        schemas(
            Event,
            api::events::CreateEventRequest,
            EventListResponse,
            ErrorResponse,
            api::health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness endpoint"),
        (name = "events", description = "Event booking endpoints")
    ),
    info(
        title = "Eventbook API",
        version = "0.1.0",
        description = "API for creating and listing event bookings",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI document as a pretty-printed JSON string
    pub fn to_json() -> Result<String, serde_json::Error> {
        Self::openapi().to_pretty_json()
    }
}
