use crate::models::{CompositionList, GameDraftList};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "scrims")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub date: DateTimeUtc,
    pub opponent: String,
    pub is_win: bool,
    pub score: String,
    pub comments: String,
    pub number_of_games: Option<i32>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub compositions: Option<CompositionList>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub game_drafts: Option<GameDraftList>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
