use crate::models::StringList;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "drafts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub created_at: DateTimeUtc,
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
    #[sea_orm(column_type = "JsonBinary")]
    pub team_bans: StringList,
    #[sea_orm(column_type = "JsonBinary")]
    pub enemy_bans: StringList,
}

impl Model {
    /// All ten role-slot champion ids, team side first.
    pub fn champion_slot_ids(&self) -> [&Option<String>; 10] {
        [
            &self.team_top_champion_id,
            &self.team_jgl_champion_id,
            &self.team_mid_champion_id,
            &self.team_adc_champion_id,
            &self.team_sup_champion_id,
            &self.enemy_top_champion_id,
            &self.enemy_jgl_champion_id,
            &self.enemy_mid_champion_id,
            &self.enemy_adc_champion_id,
            &self.enemy_sup_champion_id,
        ]
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
