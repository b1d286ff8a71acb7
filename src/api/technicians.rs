//! Technician endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::team::{CreateTechnician, Technician, TechniciansByTeamQuery},
};

/// List all technicians
#[utoipa::path(
    get,
    path = "/technicians",
    tag = "technicians",
    responses(
        (status = 200, description = "Technicians", body = Vec<Technician>)
    )
)]
pub async fn list_technicians(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Technician>>> {
    let technicians = state.services.teams.list_technicians().await?;
    Ok(Json(technicians))
}

/// Names of the technicians of one team
#[utoipa::path(
    get,
    path = "/technicians/by-team",
    tag = "technicians",
    params(TechniciansByTeamQuery),
    responses(
        (status = 200, description = "Technician names", body = Vec<String>)
    )
)]
pub async fn technicians_by_team(
    State(state): State<crate::AppState>,
    Query(query): Query<TechniciansByTeamQuery>,
) -> AppResult<Json<Vec<String>>> {
    let names = state.services.teams.technicians_by_team(&query.team).await?;
    Ok(Json(names))
}

/// Create a technician
#[utoipa::path(
    post,
    path = "/technicians",
    tag = "technicians",
    request_body = CreateTechnician,
    responses(
        (status = 201, description = "Technician created", body = Technician)
    )
)]
pub async fn create_technician(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateTechnician>,
) -> AppResult<(StatusCode, Json<Technician>)> {
    let technician = state.services.teams.create_technician(&data).await?;
    Ok((StatusCode::CREATED, Json(technician)))
}
