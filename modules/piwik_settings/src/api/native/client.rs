//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Environment, FieldSchema, PiwikSettingsApi, SettingsError, TrackerConfig};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl PiwikSettingsApi for NativeClient {
    async fn current_config(&self) -> Result<TrackerConfig, SettingsError> {
        self.service.current_config().await
    }

    async fn render_schema(&self, environment: &Environment) -> Result<FieldSchema, SettingsError> {
        self.service.render_schema(environment).await
    }

    async fn submit(&self, submission: TrackerConfig) -> Result<TrackerConfig, SettingsError> {
        self.service.submit(submission).await
    }
}
