//! Maintenance request model and projections

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{RequestStatus, RequestType};

/// Maintenance request as stored.
///
/// `team` and `technician` are copied from the equipment when the request
/// is created and never follow later equipment changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceRequest {
    pub id: i64,
    pub subject: String,
    pub equipment_id: i64,
    pub team: String,
    pub technician: String,
    pub request_type: RequestType,
    pub status: RequestStatus,
    /// Target date, present only for preventive requests
    pub scheduled_date: Option<NaiveDate>,
    /// Hours spent, set when the request is repaired
    pub duration_hours: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Create maintenance request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRequest {
    #[validate(length(min = 1, message = "Subject must not be empty"))]
    pub subject: String,
    pub equipment_id: i64,
    pub request_type: RequestType,
    /// Required for preventive requests, ignored otherwise
    pub scheduled_date: Option<NaiveDate>,
}

/// Move a request to another workflow stage
#[derive(Debug, Deserialize, ToSchema)]
pub struct AdvanceRequest {
    /// Target stage
    pub to: RequestStatus,
    /// Hours spent, required when moving to Repaired
    pub hours_spent: Option<f64>,
}

/// Request joined with its equipment name, as shown in lists and boards
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RequestFeedEntry {
    pub id: i64,
    pub subject: String,
    pub equipment_id: i64,
    /// Equipment name, "Unknown" when the equipment row is missing
    pub equipment: String,
    pub team: String,
    pub technician: String,
    pub status: RequestStatus,
    pub request_type: RequestType,
    pub scheduled_date: Option<NaiveDate>,
    pub duration_hours: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl RequestFeedEntry {
    /// Scheduled strictly before `today`, whatever the status.
    pub fn is_past_due(&self, today: NaiveDate) -> bool {
        self.scheduled_date.is_some_and(|date| date < today)
    }
}

/// Preventive maintenance calendar entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScheduleEntry {
    pub id: i64,
    pub subject: String,
    pub equipment: String,
    pub technician: String,
    pub status: RequestStatus,
    pub scheduled_date: Option<NaiveDate>,
}

/// Query parameters for the preventive calendar
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct CalendarQuery {
    /// Only entries scheduled on this day (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
}
