use std::time::Duration;

use axum::{
    routing::{get, post},
    Json, Router,
};
use common::types::Health;
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use crate::openapi;
use crate::state::AppState;

pub mod locations;
pub mod users;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: users, locations, health and API docs.
pub fn build_router(state: AppState, cors: CorsLayer, request_timeout: Duration) -> Router {
    let user_routes = Router::new()
        .route("/api", get(users::list_users))
        .route("/api/", get(users::list_users))
        .route("/api/register", post(users::register))
        .route("/api/login", post(users::login))
        .route("/api/:id", get(users::get_user).delete(users::delete_user));

    let location_routes = Router::new()
        .route("/api/locations", post(locations::save_location))
        .route("/api/locations/user/:user_id", get(locations::list_user_locations));

    let app = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .merge(user_routes)
        .merge(location_routes)
        .with_state(state);

    with_middleware(app, cors, request_timeout)
}

/// Request timeout (408), CORS and HTTP tracing around an already-stated router.
pub fn with_middleware(app: Router, cors: CorsLayer, request_timeout: Duration) -> Router {
    app.layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request, headers left out
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
