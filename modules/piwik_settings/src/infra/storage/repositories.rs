//! SeaORM repository implementation

use crate::contract::TrackerConfig;
use crate::domain::repository::ConfigRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, TransactionTrait};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::{entity, mapper};

pub struct SeaOrmConfigRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmConfigRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConfigRepository for SeaOrmConfigRepository {
    async fn load(&self) -> Result<Option<TrackerConfig>> {
        let rows = entity::Entity::find().all(&*self.db).await?;
        if rows.is_empty() {
            return Ok(None);
        }

        let values: BTreeMap<String, serde_json::Value> = rows
            .into_iter()
            .map(|row| (row.key, row.value))
            .collect();

        Ok(Some(mapper::from_values(&values)))
    }

    async fn save(&self, config: &TrackerConfig) -> Result<()> {
        let now = chrono::Utc::now();
        let models: Vec<entity::ActiveModel> = mapper::to_values(config)
            .into_iter()
            .map(|(key, value)| entity::ActiveModel {
                key: Set(key),
                value: Set(value),
                updated_at: Set(now),
            })
            .collect();

        // Replace the whole namespace atomically; a failed write leaves
        // the previous configuration in place.
        let txn = self.db.begin().await?;
        entity::Entity::delete_many().exec(&txn).await?;
        entity::Entity::insert_many(models).exec(&txn).await?;
        txn.commit().await?;

        Ok(())
    }
}
