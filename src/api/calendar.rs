//! Preventive maintenance calendar endpoint

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::request::{CalendarQuery, ScheduleEntry},
};

/// Preventive requests by scheduled date
#[utoipa::path(
    get,
    path = "/calendar",
    tag = "calendar",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Preventive schedule", body = Vec<ScheduleEntry>)
    )
)]
pub async fn preventive_calendar(
    State(state): State<crate::AppState>,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Json<Vec<ScheduleEntry>>> {
    let schedule = state.services.requests.schedule(query.date).await?;
    Ok(Json(schedule))
}
