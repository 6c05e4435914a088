// Router assembly
//
// Layer order, outermost first: trace, preflight rewrite, CORS, routes.

use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::config::CorsConfig;
use crate::openapi::ApiDoc;
use crate::services::EventService;

/// Build the full application router
pub fn build_router(service: Arc<EventService>, cors: &CorsConfig) -> Router {
    let events_state = api::events::AppState::new(service);

    Router::new()
        .merge(api::health::routes())
        .merge(api::events::routes(events_state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(api::cors::cors_layer(cors))
        .layer(middleware::from_fn(api::cors::preflight_no_content))
        .layer(TraceLayer::new_for_http())
}
