//! Maintenance request workflow

use chrono::NaiveDate;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{RequestStatus, RequestType},
        request::{AdvanceRequest, CreateRequest, MaintenanceRequest, RequestFeedEntry, ScheduleEntry},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<MaintenanceRequest> {
        self.repository.requests.get_by_id(id).await
    }

    /// All requests, newest first
    pub async fn feed(&self) -> AppResult<Vec<RequestFeedEntry>> {
        self.repository.requests.feed().await
    }

    /// Preventive calendar, optionally for one day
    pub async fn schedule(&self, date: Option<NaiveDate>) -> AppResult<Vec<ScheduleEntry>> {
        self.repository.requests.preventive_schedule(date).await
    }

    /// Open a request in the New stage.
    ///
    /// The equipment must exist and not be scrapped. Preventive requests need
    /// a scheduled date; corrective ones never keep one.
    pub async fn create(&self, data: &CreateRequest) -> AppResult<MaintenanceRequest> {
        data.validate()?;

        let scheduled_date = match data.request_type {
            RequestType::Preventive => Some(data.scheduled_date.ok_or_else(|| {
                AppError::Validation("Preventive requests require a scheduled_date".to_string())
            })?),
            RequestType::Corrective => None,
        };

        let request = self
            .repository
            .requests
            .create_for_equipment(&data.subject, data.equipment_id, data.request_type, scheduled_date)
            .await?;

        tracing::info!(
            "Request created: id={} equipment_id={} type={}",
            request.id,
            request.equipment_id,
            request.request_type
        );
        Ok(request)
    }

    /// Move a request along the workflow.
    ///
    /// Legal moves are New → In Progress, In Progress → Repaired (with hours)
    /// and New/In Progress → Scrap. Scrap retires the equipment as well.
    pub async fn advance(&self, id: i64, data: &AdvanceRequest) -> AppResult<MaintenanceRequest> {
        let current = self.repository.requests.get_by_id(id).await?;
        let from = current.status;
        let to = data.to;

        if from.is_terminal() {
            return Err(AppError::IllegalTransition(format!(
                "Request {} is already {}",
                id, from
            )));
        }
        if !from.can_transition_to(to) {
            return Err(AppError::IllegalTransition(format!(
                "Request {} cannot move from {} to {}",
                id, from, to
            )));
        }

        let duration_hours = if to == RequestStatus::Repaired {
            let hours = data.hours_spent.ok_or_else(|| {
                AppError::IllegalTransition("Moving to Repaired requires hours_spent".to_string())
            })?;
            if !hours.is_finite() || hours < 0.0 {
                return Err(AppError::Validation(format!("Invalid hours_spent: {}", hours)));
            }
            Some(hours)
        } else {
            None
        };

        self.repository
            .requests
            .transition(id, from, to, duration_hours)
            .await?;

        if to == RequestStatus::Scrap {
            tracing::info!(
                "Request {} scrapped, equipment {} retired",
                id,
                current.equipment_id
            );
        } else {
            tracing::info!("Request {} moved from {} to {}", id, from, to);
        }

        self.repository.requests.get_by_id(id).await
    }
}
