use sea_orm::entity::prelude::*;

/// One row per champion (unique index on champion_id), ratings in 0..=3.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "champion_evaluations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub champion_id: String,
    pub prio_lane: i32,
    pub strongside: i32,
    pub weakside: i32,
    pub engage: i32,
    pub peeling: i32,
    pub split: i32,
    pub hypercarry: i32,
    pub controle: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
