//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Module settings table entity; one row per setting key
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "piwik_settings")]
pub struct Model {
    /// Setting name within the module namespace (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,

    /// Setting value as JSON
    pub value: Json,

    /// Last update timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
