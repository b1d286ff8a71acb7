//! Maintenance requests table and its projections

use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{RequestStatus, RequestType},
        request::{MaintenanceRequest, RequestFeedEntry, ScheduleEntry},
    },
};

#[derive(Clone)]
pub struct RequestsRepository {
    pool: Pool<Sqlite>,
}

impl RequestsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get a request by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            SELECT id, subject, equipment_id, team, technician, request_type,
                   COALESCE(status, 'New') AS status,
                   scheduled_date, duration_hours, created_at
            FROM requests
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Create a request against an active equipment, copying its team and
    /// technician. Lookup and insert run in one transaction.
    pub async fn create_for_equipment(
        &self,
        subject: &str,
        equipment_id: i64,
        request_type: RequestType,
        scheduled_date: Option<NaiveDate>,
    ) -> AppResult<MaintenanceRequest> {
        let mut tx = self.pool.begin().await?;

        let (team, technician): (String, String) = sqlx::query_as(
            "SELECT team, technician FROM equipment WHERE id = ?1 AND scrapped = 0",
        )
        .bind(equipment_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Active equipment {} not found", equipment_id)))?;

        let row = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            INSERT INTO requests
                (subject, equipment_id, team, technician, request_type,
                 status, scheduled_date, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING id, subject, equipment_id, team, technician, request_type,
                      status, scheduled_date, duration_hours, created_at
            "#,
        )
        .bind(subject)
        .bind(equipment_id)
        .bind(&team)
        .bind(&technician)
        .bind(request_type)
        .bind(RequestStatus::New)
        .bind(scheduled_date)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Move a request from `from` to `to`.
    ///
    /// The update only applies while the stored status still equals `from`.
    /// Reaching Scrap also marks the request's equipment as scrapped, in the
    /// same transaction.
    pub async fn transition(
        &self,
        id: i64,
        from: RequestStatus,
        to: RequestStatus,
        duration_hours: Option<f64>,
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE requests
            SET status = ?1, duration_hours = COALESCE(?2, duration_hours)
            WHERE id = ?3 AND COALESCE(status, 'New') = ?4
            "#,
        )
        .bind(to)
        .bind(duration_hours)
        .bind(id)
        .bind(from)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::IllegalTransition(format!(
                "Request {} is no longer {}",
                id, from
            )));
        }

        if to == RequestStatus::Scrap {
            sqlx::query(
                "UPDATE equipment SET scrapped = 1 WHERE id = (SELECT equipment_id FROM requests WHERE id = ?1)",
            )
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// All requests with their equipment name, newest first
    pub async fn feed(&self) -> AppResult<Vec<RequestFeedEntry>> {
        let rows = sqlx::query_as::<_, RequestFeedEntry>(
            r#"
            SELECT r.id, r.subject, r.equipment_id,
                   COALESCE(e.name, 'Unknown') AS equipment,
                   r.team, r.technician,
                   COALESCE(r.status, 'New') AS status,
                   r.request_type, r.scheduled_date, r.duration_hours, r.created_at
            FROM requests r
            LEFT JOIN equipment e ON r.equipment_id = e.id
            ORDER BY r.created_at DESC, r.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Preventive requests by scheduled date, optionally for a single day
    pub async fn preventive_schedule(&self, date: Option<NaiveDate>) -> AppResult<Vec<ScheduleEntry>> {
        let mut query = String::from(
            r#"
            SELECT r.id, r.subject, e.name AS equipment, r.technician,
                   COALESCE(r.status, 'New') AS status, r.scheduled_date
            FROM requests r
            JOIN equipment e ON r.equipment_id = e.id
            WHERE r.request_type = ?1
            "#,
        );
        if date.is_some() {
            query.push_str(" AND r.scheduled_date = ?2");
        }
        query.push_str(" ORDER BY r.scheduled_date, r.id");

        let mut builder = sqlx::query_as::<_, ScheduleEntry>(&query).bind(RequestType::Preventive);
        if let Some(d) = date {
            builder = builder.bind(d);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }
}
