//! Equipment service

use validator::Validate;

use crate::{
    error::AppResult,
    models::equipment::{CreateEquipment, Equipment, EquipmentMaintenance},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Equipment that can still receive requests
    pub async fn list_active(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list_active().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        data.validate()?;
        let equipment = self.repository.equipment.create(data).await?;
        tracing::info!("Equipment created: id={} name={}", equipment.id, equipment.name);
        Ok(equipment)
    }

    /// Open request count and request history of one equipment
    pub async fn maintenance(&self, id: i64) -> AppResult<EquipmentMaintenance> {
        let equipment = self.repository.equipment.get_by_id(id).await?;
        let open_requests = self.repository.equipment.count_open_requests(id).await?;
        let requests = self.repository.equipment.list_requests(id).await?;
        Ok(EquipmentMaintenance {
            equipment,
            open_requests,
            requests,
        })
    }
}
