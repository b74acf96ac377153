use crate::entities::scrims;
use crate::models::common::double_option;
use chrono::{DateTime, Utc};
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-game lineup, role to champion name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jgl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sup: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct CompositionList(pub Vec<Composition>);

/// Link between one game of a scrim and the draft played in it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameDraftLink {
    pub game_number: i32,
    pub draft_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct GameDraftList(pub Vec<GameDraftLink>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScrimResponse {
    pub id: String,
    pub date: DateTime<Utc>,
    pub opponent: String,
    pub is_win: bool,
    pub score: String,
    pub comments: String,
    pub number_of_games: Option<i32>,
    pub compositions: Option<Vec<Composition>>,
    #[serde(rename = "drafts")]
    pub game_drafts: Option<Vec<GameDraftLink>>,
}

impl From<scrims::Model> for ScrimResponse {
    fn from(model: scrims::Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            opponent: model.opponent,
            is_win: model.is_win,
            score: model.score,
            comments: model.comments,
            number_of_games: model.number_of_games,
            compositions: model.compositions.map(|c| c.0),
            game_drafts: model.game_drafts.map(|d| d.0),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScrimRequest {
    pub opponent: String,
    pub is_win: bool,
    pub score: String,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub number_of_games: Option<i32>,
    #[serde(default)]
    pub compositions: Option<Vec<Composition>>,
    #[serde(default, rename = "drafts")]
    pub game_drafts: Option<Vec<GameDraftLink>>,
}

/// Partial scrim update; optional columns sent as `null` are cleared,
/// absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScrimRequest {
    pub opponent: Option<String>,
    pub is_win: Option<bool>,
    pub score: Option<String>,
    pub comments: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub number_of_games: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Vec<Composition>>)]
    pub compositions: Option<Option<Vec<Composition>>>,
    #[serde(default, deserialize_with = "double_option", rename = "drafts")]
    #[schema(value_type = Option<Vec<GameDraftLink>>)]
    pub game_drafts: Option<Option<Vec<GameDraftLink>>>,
}
