//! Equipment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{EquipmentCategory, RequestStatus};

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i64,
    /// Equipment name
    pub name: String,
    pub serial: String,
    pub category: EquipmentCategory,
    pub department: String,
    /// Assigned employee
    pub owner: String,
    /// Maintenance team label
    pub team: String,
    /// Default technician
    pub technician: String,
    pub location: String,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_date: Option<NaiveDate>,
    /// Set once a request on this equipment reaches Scrap
    pub scrapped: bool,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "Equipment name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub serial: String,
    pub category: EquipmentCategory,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub technician: String,
    #[serde(default)]
    pub location: String,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_date: Option<NaiveDate>,
}

/// One request as listed under an equipment
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentRequestEntry {
    pub id: i64,
    pub subject: String,
    pub status: RequestStatus,
    pub technician: String,
}

/// Maintenance summary of one equipment
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentMaintenance {
    pub equipment: Equipment,
    /// Requests not yet repaired
    pub open_requests: i64,
    pub requests: Vec<EquipmentRequestEntry>,
}
