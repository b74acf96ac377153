use crate::entities::patch_notes;
use crate::error::{AppError, AppResult};
use crate::models::{CreatePatchNoteRequest, PATCH_NOTE_CATEGORIES, PatchNoteResponse};
use crate::utils::require_non_blank;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

#[derive(Clone)]
pub struct PatchNoteService {
    pool: DatabaseConnection,
}

impl PatchNoteService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn patch_notes(&self) -> AppResult<Vec<PatchNoteResponse>> {
        let notes = patch_notes::Entity::find()
            .order_by_desc(patch_notes::Column::CreatedAt)
            .all(&self.pool)
            .await?;
        Ok(notes.into_iter().map(PatchNoteResponse::from).collect())
    }

    pub async fn create_patch_note(
        &self,
        request: CreatePatchNoteRequest,
    ) -> AppResult<PatchNoteResponse> {
        require_non_blank("version", &request.version)?;
        require_non_blank("title", &request.title)?;
        if !PATCH_NOTE_CATEGORIES.contains(&request.category.as_str()) {
            return Err(AppError::ValidationError(format!(
                "category must be one of: {}",
                PATCH_NOTE_CATEGORIES.join(", ")
            )));
        }

        let note = patch_notes::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            version: Set(request.version),
            title: Set(request.title),
            content: Set(request.content),
            category: Set(request.category),
            created_at: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await?;

        Ok(note.into())
    }

    pub async fn delete_patch_note(&self, id: &str) -> AppResult<()> {
        let result = patch_notes::Entity::delete_by_id(id).exec(&self.pool).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Patch note {id} not found")));
        }
        Ok(())
    }
}
