use crate::entities::{draft_variants, drafts};
use crate::models::common::double_option;
use crate::models::{ChampionResponse, StringList};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub team_top_champion_id: Option<String>,
    pub team_jgl_champion_id: Option<String>,
    pub team_mid_champion_id: Option<String>,
    pub team_adc_champion_id: Option<String>,
    pub team_sup_champion_id: Option<String>,
    pub enemy_top_champion_id: Option<String>,
    pub enemy_jgl_champion_id: Option<String>,
    pub enemy_mid_champion_id: Option<String>,
    pub enemy_adc_champion_id: Option<String>,
    pub enemy_sup_champion_id: Option<String>,
    pub team_bans: Vec<String>,
    pub enemy_bans: Vec<String>,
}

impl From<drafts::Model> for DraftResponse {
    fn from(model: drafts::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            team_top_champion_id: model.team_top_champion_id,
            team_jgl_champion_id: model.team_jgl_champion_id,
            team_mid_champion_id: model.team_mid_champion_id,
            team_adc_champion_id: model.team_adc_champion_id,
            team_sup_champion_id: model.team_sup_champion_id,
            enemy_top_champion_id: model.enemy_top_champion_id,
            enemy_jgl_champion_id: model.enemy_jgl_champion_id,
            enemy_mid_champion_id: model.enemy_mid_champion_id,
            enemy_adc_champion_id: model.enemy_adc_champion_id,
            enemy_sup_champion_id: model.enemy_sup_champion_id,
            team_bans: model.team_bans.0,
            enemy_bans: model.enemy_bans.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftVariantResponse {
    pub id: String,
    pub draft_id: String,
    pub name: String,
    pub top_champion_id: Option<String>,
    pub jgl_champion_id: Option<String>,
    pub mid_champion_id: Option<String>,
    pub adc_champion_id: Option<String>,
    pub sup_champion_id: Option<String>,
}

impl From<draft_variants::Model> for DraftVariantResponse {
    fn from(model: draft_variants::Model) -> Self {
        Self {
            id: model.id,
            draft_id: model.draft_id,
            name: model.name,
            top_champion_id: model.top_champion_id,
            jgl_champion_id: model.jgl_champion_id,
            mid_champion_id: model.mid_champion_id,
            adc_champion_id: model.adc_champion_id,
            sup_champion_id: model.sup_champion_id,
        }
    }
}

/// Draft with variants and each role slot resolved to its champion record.
/// A resolved slot is omitted when the slot id is unset or stale, never
/// zero-filled — one dangling id must not break the rest of the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftWithDetails {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub team_top_champion_id: Option<String>,
    pub team_jgl_champion_id: Option<String>,
    pub team_mid_champion_id: Option<String>,
    pub team_adc_champion_id: Option<String>,
    pub team_sup_champion_id: Option<String>,
    pub enemy_top_champion_id: Option<String>,
    pub enemy_jgl_champion_id: Option<String>,
    pub enemy_mid_champion_id: Option<String>,
    pub enemy_adc_champion_id: Option<String>,
    pub enemy_sup_champion_id: Option<String>,
    pub team_bans: Vec<String>,
    pub enemy_bans: Vec<String>,
    pub variants: Vec<DraftVariantResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_top_champion: Option<ChampionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_jgl_champion: Option<ChampionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_mid_champion: Option<ChampionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_adc_champion: Option<ChampionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_sup_champion: Option<ChampionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemy_top_champion: Option<ChampionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemy_jgl_champion: Option<ChampionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemy_mid_champion: Option<ChampionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemy_adc_champion: Option<ChampionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemy_sup_champion: Option<ChampionResponse>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDraftRequest {
    pub name: String,
    #[serde(default)]
    pub team_top_champion_id: Option<String>,
    #[serde(default)]
    pub team_jgl_champion_id: Option<String>,
    #[serde(default)]
    pub team_mid_champion_id: Option<String>,
    #[serde(default)]
    pub team_adc_champion_id: Option<String>,
    #[serde(default)]
    pub team_sup_champion_id: Option<String>,
    #[serde(default)]
    pub enemy_top_champion_id: Option<String>,
    #[serde(default)]
    pub enemy_jgl_champion_id: Option<String>,
    #[serde(default)]
    pub enemy_mid_champion_id: Option<String>,
    #[serde(default)]
    pub enemy_adc_champion_id: Option<String>,
    #[serde(default)]
    pub enemy_sup_champion_id: Option<String>,
    #[serde(default)]
    pub team_bans: Vec<String>,
    #[serde(default)]
    pub enemy_bans: Vec<String>,
}

impl CreateDraftRequest {
    pub fn bans(&self) -> (StringList, StringList) {
        (
            StringList(self.team_bans.clone()),
            StringList(self.enemy_bans.clone()),
        )
    }
}

/// Partial draft update; a slot sent as `null` clears it, an absent slot is
/// left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDraftRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub team_top_champion_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub team_jgl_champion_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub team_mid_champion_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub team_adc_champion_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub team_sup_champion_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub enemy_top_champion_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub enemy_jgl_champion_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub enemy_mid_champion_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub enemy_adc_champion_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub enemy_sup_champion_id: Option<Option<String>>,
    pub team_bans: Option<Vec<String>>,
    pub enemy_bans: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDraftVariantRequest {
    pub name: String,
    #[serde(default)]
    pub top_champion_id: Option<String>,
    #[serde(default)]
    pub jgl_champion_id: Option<String>,
    #[serde(default)]
    pub mid_champion_id: Option<String>,
    #[serde(default)]
    pub adc_champion_id: Option<String>,
    #[serde(default)]
    pub sup_champion_id: Option<String>,
}
