use crate::entities::champion_synergies;
use crate::error::{AppError, AppResult};
use crate::models::{CreateSynergyRequest, SYNERGY_TYPES, SynergyResponse};
use crate::utils::{require_non_blank, validate_rating};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

#[derive(Clone)]
pub struct SynergyService {
    pool: DatabaseConnection,
}

impl SynergyService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn synergies(&self) -> AppResult<Vec<SynergyResponse>> {
        let synergies = champion_synergies::Entity::find().all(&self.pool).await?;
        Ok(synergies.into_iter().map(SynergyResponse::from).collect())
    }

    pub async fn create_synergy(&self, request: CreateSynergyRequest) -> AppResult<SynergyResponse> {
        require_non_blank("champion1Id", &request.champion1_id)?;
        require_non_blank("champion2Id", &request.champion2_id)?;
        if !SYNERGY_TYPES.contains(&request.synergy_type.as_str()) {
            return Err(AppError::ValidationError(format!(
                "synergyType must be one of: {}",
                SYNERGY_TYPES.join(", ")
            )));
        }
        validate_rating("rating", request.rating)?;

        let synergy = champion_synergies::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            champion1_id: Set(request.champion1_id),
            champion2_id: Set(request.champion2_id),
            synergy_type: Set(request.synergy_type),
            rating: Set(request.rating),
            notes: Set(request.notes.unwrap_or_default()),
        }
        .insert(&self.pool)
        .await?;

        Ok(synergy.into())
    }

    pub async fn delete_synergy(&self, id: &str) -> AppResult<()> {
        let result = champion_synergies::Entity::delete_by_id(id)
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Synergy {id} not found")));
        }
        Ok(())
    }
}
