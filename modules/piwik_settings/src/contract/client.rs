//! Native client trait for inter-module communication
//!
//! This trait defines the API that host modules use to interact with the
//! piwik settings module. NO HTTP - direct function calls for performance.

use super::{
    error::SettingsError,
    model::{Environment, TrackerConfig},
    schema::FieldSchema,
};
use async_trait::async_trait;

/// Piwik settings API for inter-module communication
#[async_trait]
pub trait PiwikSettingsApi: Send + Sync {
    /// Read the stored configuration, with defaults filled in for
    /// anything never saved.
    async fn current_config(&self) -> Result<TrackerConfig, SettingsError>;

    /// Render the settings form schema for the given host environment.
    async fn render_schema(&self, environment: &Environment) -> Result<FieldSchema, SettingsError>;

    /// Validate a submission and, when it passes, persist it atomically.
    ///
    /// Returns the normalized configuration as saved.
    async fn submit(&self, submission: TrackerConfig) -> Result<TrackerConfig, SettingsError>;
}
