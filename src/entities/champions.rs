use crate::models::RoleList;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "champions")]
pub struct Model {
    /// Catalog slug ("Ahri", "LeeSin"), assigned at seed time.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub key: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub roles: RoleList,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
