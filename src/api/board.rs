//! Dashboard and kanban endpoints

use axum::{extract::State, Json};
use axum_extra::extract::{Query, QueryRejection};

use crate::{
    error::{AppError, AppResult},
    models::board::{DashboardFilter, DashboardQuery, DashboardResponse, KanbanBoard},
};

/// Filtered open requests
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "board",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Filtered requests, filter options and empty-state message", body = DashboardResponse),
        (status = 400, description = "Unknown status or request type")
    )
)]
pub async fn dashboard(
    State(state): State<crate::AppState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> AppResult<Json<DashboardResponse>> {
    let Query(query) = query.map_err(|e| AppError::Validation(e.to_string()))?;
    let filter = DashboardFilter::from(query);
    let response = state.services.dashboard.dashboard(filter, super::today()).await?;
    Ok(Json(response))
}

/// Requests grouped by workflow stage
#[utoipa::path(
    get,
    path = "/kanban",
    tag = "board",
    responses(
        (status = 200, description = "Kanban columns New, In Progress, Repaired, Scrap", body = KanbanBoard)
    )
)]
pub async fn kanban(State(state): State<crate::AppState>) -> AppResult<Json<KanbanBoard>> {
    let board = state.services.dashboard.kanban(super::today()).await?;
    Ok(Json(board))
}
