//! API handlers for GearGuard REST endpoints

pub mod board;
pub mod calendar;
pub mod equipment;
pub mod health;
pub mod openapi;
pub mod requests;
pub mod teams;
pub mod technicians;

use axum::{
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Local calendar date used for overdue checks
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Teams & technicians
        .route("/teams", get(teams::list_teams).post(teams::create_team))
        .route(
            "/technicians",
            get(technicians::list_technicians).post(technicians::create_technician),
        )
        .route("/technicians/by-team", get(technicians::technicians_by_team))
        // Equipment
        .route("/equipment", get(equipment::list_equipment).post(equipment::create_equipment))
        .route("/equipment/:id", get(equipment::get_equipment))
        .route("/equipment/:id/maintenance", get(equipment::get_maintenance))
        // Requests
        .route("/requests", get(requests::list_requests).post(requests::create_request))
        .route("/requests/:id", get(requests::get_request))
        .route("/requests/:id/advance", post(requests::advance_request))
        // Views
        .route("/dashboard", get(board::dashboard))
        .route("/kanban", get(board::kanban))
        .route("/calendar", get(calendar::preventive_calendar))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
