//! Dashboard and kanban board views

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::enums::{RequestStatus, RequestType};
use super::request::RequestFeedEntry;

// ---------------------------------------------------------------------------
// Dashboard filters
// ---------------------------------------------------------------------------

/// Dashboard query parameters. Multi-valued filters repeat their key,
/// e.g. `?status=New&status=In%20Progress`.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// Teams
    #[serde(default)]
    pub team: Vec<String>,
    /// Technicians
    #[serde(default)]
    pub technician: Vec<String>,
    /// Statuses
    #[serde(default)]
    pub status: Vec<RequestStatus>,
    /// Request types
    #[serde(default)]
    pub request_type: Vec<RequestType>,
    /// Equipment names
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Only requests scheduled before today
    pub overdue_only: Option<bool>,
    /// Also list repaired requests
    pub include_repaired: Option<bool>,
}

/// Parsed dashboard filters. An empty selection does not filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct DashboardFilter {
    pub teams: Vec<String>,
    pub technicians: Vec<String>,
    pub statuses: Vec<RequestStatus>,
    pub request_types: Vec<RequestType>,
    pub equipment: Vec<String>,
    pub overdue_only: bool,
    pub include_repaired: bool,
}

impl From<DashboardQuery> for DashboardFilter {
    fn from(query: DashboardQuery) -> Self {
        Self {
            teams: query.team,
            technicians: query.technician,
            statuses: query.status,
            request_types: query.request_type,
            equipment: query.equipment,
            overdue_only: query.overdue_only.unwrap_or(false),
            include_repaired: query.include_repaired.unwrap_or(false),
        }
    }
}

/// Values offered by each dashboard filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct FilterOptions {
    pub teams: Vec<String>,
    pub technicians: Vec<String>,
    pub statuses: Vec<RequestStatus>,
    pub request_types: Vec<RequestType>,
    pub equipment: Vec<String>,
}

// ---------------------------------------------------------------------------
// Empty state
// ---------------------------------------------------------------------------

/// Which filter combination produced an empty dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmptyStateKind {
    /// Exactly one status selected
    Status,
    /// Several statuses selected
    CaughtUp,
    NoOverdue,
    NoMatch,
    BoardClear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Info,
}

/// Message shown instead of an empty request table
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EmptyState {
    pub kind: EmptyStateKind,
    pub tone: Tone,
    pub message: String,
    pub tip: String,
}

/// Dashboard response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub requests: Vec<RequestFeedEntry>,
    pub total: usize,
    pub filter: DashboardFilter,
    pub options: FilterOptions,
    /// Present only when no request matches
    pub empty_state: Option<EmptyState>,
}

// ---------------------------------------------------------------------------
// Kanban
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct KanbanCard {
    pub id: i64,
    pub subject: String,
    pub equipment: String,
    pub technician: String,
    pub request_type: RequestType,
    pub scheduled_date: Option<NaiveDate>,
    pub duration_hours: Option<f64>,
    pub overdue: bool,
    /// Stages this card may be moved to
    pub moves: Vec<RequestStatus>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct KanbanColumn {
    pub stage: RequestStatus,
    pub cards: Vec<KanbanCard>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct KanbanBoard {
    pub columns: Vec<KanbanColumn>,
}
