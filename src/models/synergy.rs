use crate::entities::champion_synergies;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SYNERGY_TYPES: [&str; 2] = ["positive", "negative"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SynergyResponse {
    pub id: String,
    pub champion1_id: String,
    pub champion2_id: String,
    pub synergy_type: String,
    pub rating: i32,
    pub notes: String,
}

impl From<champion_synergies::Model> for SynergyResponse {
    fn from(model: champion_synergies::Model) -> Self {
        Self {
            id: model.id,
            champion1_id: model.champion1_id,
            champion2_id: model.champion2_id,
            synergy_type: model.synergy_type,
            rating: model.rating,
            notes: model.notes,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSynergyRequest {
    pub champion1_id: String,
    pub champion2_id: String,
    pub synergy_type: String,
    pub rating: i32,
    #[serde(default)]
    pub notes: Option<String>,
}
