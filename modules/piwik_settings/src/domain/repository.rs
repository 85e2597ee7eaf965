//! Repository trait for the configuration store
//!
//! The trait defines the interface for configuration persistence.
//! The SeaORM implementation is in infra/storage/repositories.rs

use crate::contract::TrackerConfig;
use anyhow::Result;
use async_trait::async_trait;

/// Repository for the module's configuration namespace
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Load the stored configuration.
    ///
    /// Returns `None` when nothing has been saved yet; keys missing from
    /// the stored record are filled with their defaults by the
    /// implementation so callers never see partial data.
    async fn load(&self) -> Result<Option<TrackerConfig>>;

    /// Replace the whole namespace with `config` in one transaction.
    ///
    /// Either every value is written or the store is left unchanged.
    async fn save(&self, config: &TrackerConfig) -> Result<()>;
}
