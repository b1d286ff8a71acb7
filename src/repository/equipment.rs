//! Equipment table

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, EquipmentRequestEntry},
};

const EQUIPMENT_COLUMNS: &str = "id, name, serial, category, department, owner, team, technician, \
     location, purchase_date, warranty_date, scrapped";

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Sqlite>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List equipment that has not been scrapped
    pub async fn list_active(&self) -> AppResult<Vec<Equipment>> {
        let query = format!(
            "SELECT {} FROM equipment WHERE scrapped = 0 ORDER BY id",
            EQUIPMENT_COLUMNS
        );
        let rows = sqlx::query_as::<_, Equipment>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get equipment by ID, scrapped or not
    pub async fn get_by_id(&self, id: i64) -> AppResult<Equipment> {
        let query = format!("SELECT {} FROM equipment WHERE id = ?1", EQUIPMENT_COLUMNS);
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Create equipment, never scrapped
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let query = format!(
            r#"
            INSERT INTO equipment
                (name, serial, category, department, owner, team, technician,
                 location, purchase_date, warranty_date, scrapped)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, 0)
            RETURNING {}
            "#,
            EQUIPMENT_COLUMNS
        );
        let row = sqlx::query_as::<_, Equipment>(&query)
            .bind(&data.name)
            .bind(&data.serial)
            .bind(data.category)
            .bind(&data.department)
            .bind(&data.owner)
            .bind(&data.team)
            .bind(&data.technician)
            .bind(&data.location)
            .bind(data.purchase_date)
            .bind(data.warranty_date)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Count requests on an equipment that are not yet repaired
    pub async fn count_open_requests(&self, id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM requests
            WHERE equipment_id = ?1 AND COALESCE(status, 'New') != 'Repaired'
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// All requests raised against an equipment, oldest first
    pub async fn list_requests(&self, id: i64) -> AppResult<Vec<EquipmentRequestEntry>> {
        let rows = sqlx::query_as::<_, EquipmentRequestEntry>(
            r#"
            SELECT id, subject, COALESCE(status, 'New') AS status, technician
            FROM requests
            WHERE equipment_id = ?1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
