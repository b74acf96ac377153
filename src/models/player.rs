use crate::entities::{player_availability, players};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: String,
    pub name: String,
    pub role: String,
}

impl From<players::Model> for PlayerResponse {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            role: model.role,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub id: String,
    pub player_id: String,
    pub day_of_week: i32,
    pub is_available: bool,
}

impl From<player_availability::Model> for AvailabilityResponse {
    fn from(model: player_availability::Model) -> Self {
        Self {
            id: model.id,
            player_id: model.player_id,
            day_of_week: model.day_of_week,
            is_available: model.is_available,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertAvailabilityRequest {
    pub player_id: String,
    pub day_of_week: i32,
    pub is_available: bool,
}
