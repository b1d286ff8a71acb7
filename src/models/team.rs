//! Maintenance team and technician models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

// ---------------------------------------------------------------------------
// Team
// ---------------------------------------------------------------------------

/// A maintenance team
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    pub id: i64,
    /// Unique team name
    pub name: String,
}

/// Create team request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTeam {
    #[validate(length(min = 1, message = "Team name must not be empty"))]
    pub name: String,
}

// ---------------------------------------------------------------------------
// Technician
// ---------------------------------------------------------------------------

/// A technician. `team` is a free-text label, not a reference to `teams`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Technician {
    pub id: i64,
    pub name: String,
    pub team: String,
}

/// Create technician request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTechnician {
    pub name: String,
    #[serde(default)]
    pub team: String,
}

/// Query parameters for technicians of a team
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct TechniciansByTeamQuery {
    /// Exact team label
    pub team: String,
}
