//! Teams and technicians tables

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::team::{CreateTechnician, Team, Technician},
};

#[derive(Clone)]
pub struct TeamsRepository {
    pool: Pool<Sqlite>,
}

impl TeamsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List teams ordered by name
    pub async fn list(&self) -> AppResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, Team>("SELECT id, name FROM teams ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a team. A taken name surfaces as a unique-constraint
    /// `sqlx::Error::Database`.
    pub async fn create(&self, name: &str) -> AppResult<Team> {
        let row = sqlx::query_as::<_, Team>(
            "INSERT INTO teams (name) VALUES (?1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    // ---- Technicians ----

    /// List all technicians
    pub async fn list_technicians(&self) -> AppResult<Vec<Technician>> {
        let rows = sqlx::query_as::<_, Technician>(
            "SELECT id, name, team FROM technicians ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Names of the technicians whose team label is exactly `team`
    pub async fn technician_names_by_team(&self, team: &str) -> AppResult<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM technicians WHERE team = ?1 ORDER BY id",
        )
        .bind(team)
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    pub async fn create_technician(&self, data: &CreateTechnician) -> AppResult<Technician> {
        let row = sqlx::query_as::<_, Technician>(
            "INSERT INTO technicians (name, team) VALUES (?1, ?2) RETURNING id, name, team",
        )
        .bind(&data.name)
        .bind(&data.team)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
