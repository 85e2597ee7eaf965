//! Module assembly and lifecycle

use crate::config::Config;
use crate::domain::{
    HttpReachabilityProbe, NoOpEventPublisher, NoOpTrackingCodeCache, Service,
};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;

/// Piwik settings module
///
/// Owns the wiring: storage repository, reachability probe, cache hook and
/// event publisher are assembled here and handed to the domain service.
pub struct PiwikSettingsModule {
    config: Config,
    service: RwLock<Option<Arc<Service>>>,
}

impl PiwikSettingsModule {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            service: RwLock::new(None),
        }
    }

    /// Initialize against a database handle with the default no-op hooks.
    pub async fn init(&self, db: Arc<DatabaseConnection>) -> Result<()> {
        self.init_with(
            db,
            Arc::new(NoOpTrackingCodeCache),
            Arc::new(NoOpEventPublisher),
        )
        .await
    }

    /// Initialize with host-provided cache and event hooks.
    pub async fn init_with(
        &self,
        db: Arc<DatabaseConnection>,
        cache: Arc<dyn crate::domain::TrackingCodeCache>,
        event_publisher: Arc<dyn crate::domain::EventPublisher>,
    ) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(&*db, None).await?;

        let repo = Arc::new(crate::infra::storage::repositories::SeaOrmConfigRepository::new(db));
        let probe = Arc::new(HttpReachabilityProbe::new(
            Duration::from_secs(self.config.probe_timeout_secs),
            &self.config.probe_user_agent,
        )?);

        let service = Arc::new(Service::new(
            self.config.clone(),
            repo,
            probe,
            cache,
            event_publisher,
        ));
        *self.service.write() = Some(service);

        tracing::info!("piwik settings module initialized");
        Ok(())
    }

    /// The native client for in-process callers.
    pub fn client(&self) -> Result<Arc<dyn crate::contract::PiwikSettingsApi>> {
        let service = self.service()?;
        Ok(Arc::new(crate::api::native::NativeClient::new(service)))
    }

    /// The REST router for mounting into the host server.
    pub fn router(&self) -> Result<axum::Router> {
        let service = self.service()?;
        Ok(crate::api::rest::routes::router(service))
    }

    fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("module not initialized"))
    }
}

impl Default for PiwikSettingsModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
