//! Maintenance request endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::request::{AdvanceRequest, CreateRequest, MaintenanceRequest, RequestFeedEntry},
};

/// Request feed, newest first
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    responses(
        (status = 200, description = "All requests with equipment names", body = Vec<RequestFeedEntry>)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<RequestFeedEntry>>> {
    let feed = state.services.requests.feed().await?;
    Ok(Json(feed))
}

/// Get a request by ID
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = i64, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = MaintenanceRequest),
        (status = 404, description = "Request not found")
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state.services.requests.get_by_id(id).await?;
    Ok(Json(request))
}

/// Create a maintenance request
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = CreateRequest,
    responses(
        (status = 201, description = "Request created", body = MaintenanceRequest),
        (status = 400, description = "Missing subject or scheduled date"),
        (status = 404, description = "Equipment missing or scrapped")
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<MaintenanceRequest>)> {
    let request = state.services.requests.create(&data).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Move a request to another stage
#[utoipa::path(
    post,
    path = "/requests/{id}/advance",
    tag = "requests",
    params(("id" = i64, Path, description = "Request ID")),
    request_body = AdvanceRequest,
    responses(
        (status = 200, description = "Request moved", body = MaintenanceRequest),
        (status = 400, description = "Invalid hours"),
        (status = 404, description = "Request not found"),
        (status = 422, description = "Move not allowed from the current stage")
    )
)]
pub async fn advance_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<AdvanceRequest>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state.services.requests.advance(id, &data).await?;
    Ok(Json(request))
}
