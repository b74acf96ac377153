use sea_orm::entity::prelude::*;

/// Alternate lineup for a draft; dropped with its draft (ON DELETE CASCADE).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "draft_variants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub draft_id: String,
    pub name: String,
    pub top_champion_id: Option<String>,
    pub jgl_champion_id: Option<String>,
    pub mid_champion_id: Option<String>,
    pub adc_champion_id: Option<String>,
    pub sup_champion_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
