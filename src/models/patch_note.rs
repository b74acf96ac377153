use crate::entities::patch_notes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const PATCH_NOTE_CATEGORIES: [&str; 4] = ["champion", "item", "system", "meta"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchNoteResponse {
    pub id: String,
    pub version: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<patch_notes::Model> for PatchNoteResponse {
    fn from(model: patch_notes::Model) -> Self {
        Self {
            id: model.id,
            version: model.version,
            title: model.title,
            content: model.content,
            category: model.category,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatchNoteRequest {
    pub version: String,
    pub title: String,
    pub content: String,
    pub category: String,
}
