//! Teams and technicians service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::team::{CreateTeam, CreateTechnician, Team, Technician},
    repository::Repository,
};

#[derive(Clone)]
pub struct TeamsService {
    repository: Repository,
}

impl TeamsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Team>> {
        self.repository.teams.list().await
    }

    /// Create a team; a taken name is reported as `AppError::Duplicate`
    /// and leaves the table unchanged.
    pub async fn create(&self, data: &CreateTeam) -> AppResult<Team> {
        data.validate()?;

        match self.repository.teams.create(&data.name).await {
            Ok(team) => {
                tracing::info!("Team created: id={} name={}", team.id, team.name);
                Ok(team)
            }
            Err(AppError::Database(sqlx::Error::Database(e))) if e.is_unique_violation() => {
                tracing::debug!("Team name already taken: {}", data.name);
                Err(AppError::Duplicate(format!("Team '{}' already exists", data.name)))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn list_technicians(&self) -> AppResult<Vec<Technician>> {
        self.repository.teams.list_technicians().await
    }

    pub async fn technicians_by_team(&self, team: &str) -> AppResult<Vec<String>> {
        self.repository.teams.technician_names_by_team(team).await
    }

    /// Technicians are not deduplicated and their team label is not checked
    /// against the teams table.
    pub async fn create_technician(&self, data: &CreateTechnician) -> AppResult<Technician> {
        let technician = self.repository.teams.create_technician(data).await?;
        tracing::info!(
            "Technician created: id={} name={} team={}",
            technician.id,
            technician.name,
            technician.team
        );
        Ok(technician)
    }
}
