//! Domain service - business logic orchestration

use super::cache::TrackingCodeCache;
use super::events::{EventPublisher, SettingsEvent};
use super::probe::{ReachabilityProbe, TRACKER_ENDPOINT};
use super::repository::ConfigRepository;
use super::{schema, validation};
use crate::config::Config;
use crate::contract::{Environment, FieldError, FieldSchema, SettingsError, TrackerConfig};
use std::sync::Arc;

/// Domain service for tracker settings management
pub struct Service {
    config: Config,
    repo: Arc<dyn ConfigRepository>,
    probe: Arc<dyn ReachabilityProbe>,
    cache: Arc<dyn TrackingCodeCache>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        config: Config,
        repo: Arc<dyn ConfigRepository>,
        probe: Arc<dyn ReachabilityProbe>,
        cache: Arc<dyn TrackingCodeCache>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            config,
            repo,
            probe,
            cache,
            event_publisher,
        }
    }

    /// Read the stored configuration, falling back to defaults for a
    /// namespace that has never been saved.
    pub async fn current_config(&self) -> Result<TrackerConfig, SettingsError> {
        Ok(self.load_stored().await?.unwrap_or_default())
    }

    /// Render the settings form schema against the stored configuration.
    pub async fn render_schema(
        &self,
        environment: &Environment,
    ) -> Result<FieldSchema, SettingsError> {
        let current = self.current_config().await?;
        Ok(schema::build(&current, environment))
    }

    /// Validate a submission and persist it when it passes.
    ///
    /// Every check runs and the error report is complete; nothing is
    /// written unless the report is empty. Cache invalidation compares the
    /// submitted `cache` flag against the stored value read at the start
    /// of the request, so concurrent edits cannot suppress the signal.
    pub async fn submit(
        &self,
        submission: TrackerConfig,
    ) -> Result<TrackerConfig, SettingsError> {
        let stored = self.load_stored().await?;

        let candidate = validation::normalize(submission);
        let mut errors = validation::validate(&candidate);
        self.probe_tracker_urls(&candidate, &mut errors).await;

        if !errors.is_empty() {
            return Err(SettingsError::Invalid { errors });
        }

        let first_save = stored.is_none();
        let cache_was_enabled = stored.map(|config| config.cache).unwrap_or(false);

        self.repo.save(&candidate).await.map_err(|err| {
            tracing::error!("failed to persist tracker settings: {err:#}");
            SettingsError::Store {
                reason: err.to_string(),
            }
        })?;
        tracing::info!(site_id = %candidate.site_id, "tracker settings saved");

        if cache_was_enabled && !candidate.cache {
            if let Err(err) = self.cache.clear().await {
                tracing::warn!("failed to clear cached tracking code: {err:#}");
            }
            self.publish(SettingsEvent::cache_invalidated()).await;
        }
        self.publish(SettingsEvent::saved(&candidate.site_id, first_save))
            .await;

        Ok(candidate)
    }

    /// Probe the configured tracker URLs, appending a field error per
    /// unreachable URL. Honours the module's reachability toggle.
    async fn probe_tracker_urls(&self, candidate: &TrackerConfig, errors: &mut Vec<FieldError>) {
        if !self.config.validate_tracker_reachability {
            return;
        }

        if !candidate.url_http.is_empty() {
            if let Err(failure) = self.probe.probe(&candidate.url_http).await {
                errors.push(FieldError::reachability(
                    "url_http",
                    probe_message(&candidate.url_http, &failure.to_string()),
                ));
            }
        }

        if let Some(url_https) = candidate.url_https.as_deref() {
            if let Err(failure) = self.probe.probe(url_https).await {
                errors.push(FieldError::reachability(
                    "url_https",
                    probe_message(url_https, &failure.to_string()),
                ));
            }
        }
    }

    async fn load_stored(&self) -> Result<Option<TrackerConfig>, SettingsError> {
        self.repo.load().await.map_err(|err| {
            tracing::error!("failed to read tracker settings: {err:#}");
            SettingsError::Store {
                reason: err.to_string(),
            }
        })
    }

    async fn publish(&self, event: SettingsEvent) {
        if let Err(err) = self.event_publisher.publish(event).await {
            // Events are best effort and never fail the submission.
            tracing::warn!("failed to publish settings event: {err:#}");
        }
    }
}

fn probe_message(base_url: &str, failure: &str) -> String {
    format!("The validation of \"{base_url}{TRACKER_ENDPOINT}\" failed: {failure}.")
}
