use crate::entities::{player_availability, players};
use crate::error::{AppError, AppResult};
use crate::models::{
    AvailabilityResponse, CreatePlayerRequest, PlayerResponse, UpsertAvailabilityRequest,
};
use crate::utils::{require_non_blank, validate_day_of_week};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct PlayerService {
    pool: DatabaseConnection,
}

impl PlayerService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn players(&self) -> AppResult<Vec<PlayerResponse>> {
        let players = players::Entity::find()
            .order_by_asc(players::Column::Name)
            .all(&self.pool)
            .await?;
        Ok(players.into_iter().map(PlayerResponse::from).collect())
    }

    pub async fn create_player(&self, request: CreatePlayerRequest) -> AppResult<PlayerResponse> {
        require_non_blank("name", &request.name)?;
        require_non_blank("role", &request.role)?;

        let player = players::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(request.name),
            role: Set(request.role),
        }
        .insert(&self.pool)
        .await?;

        Ok(player.into())
    }

    /// Availability rows go with the player (ON DELETE CASCADE).
    pub async fn delete_player(&self, id: &str) -> AppResult<()> {
        let result = players::Entity::delete_by_id(id).exec(&self.pool).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Player {id} not found")));
        }
        Ok(())
    }

    pub async fn availability(&self) -> AppResult<Vec<AvailabilityResponse>> {
        let rows = player_availability::Entity::find().all(&self.pool).await?;
        Ok(rows.into_iter().map(AvailabilityResponse::from).collect())
    }

    /// Idempotent single-flag upsert for a (player, weekday) pair. Runs in a
    /// transaction with a row lock; the unique index on the pair backstops
    /// racing inserts.
    pub async fn upsert_availability(
        &self,
        request: UpsertAvailabilityRequest,
    ) -> AppResult<AvailabilityResponse> {
        require_non_blank("playerId", &request.player_id)?;
        validate_day_of_week(request.day_of_week)?;

        let player_exists = players::Entity::find_by_id(request.player_id.as_str())
            .one(&self.pool)
            .await?
            .is_some();
        if !player_exists {
            return Err(AppError::NotFound(format!(
                "Player {} not found",
                request.player_id
            )));
        }

        let txn = self.pool.begin().await?;

        let existing = player_availability::Entity::find()
            .filter(player_availability::Column::PlayerId.eq(request.player_id.as_str()))
            .filter(player_availability::Column::DayOfWeek.eq(request.day_of_week))
            .lock_exclusive()
            .one(&txn)
            .await?;

        let saved = match existing {
            Some(row) => {
                let mut model = row.into_active_model();
                model.is_available = Set(request.is_available);
                model.update(&txn).await?
            }
            None => {
                player_availability::ActiveModel {
                    id: Set(Uuid::new_v4().to_string()),
                    player_id: Set(request.player_id),
                    day_of_week: Set(request.day_of_week),
                    is_available: Set(request.is_available),
                }
                .insert(&txn)
                .await?
            }
        };

        txn.commit().await?;

        Ok(saved.into())
    }
}
