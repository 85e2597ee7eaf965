/// Domain events for the piwik settings module
///
/// Events record configuration changes for audit consumers. Publishing is
/// best effort: a failed publish is logged and never fails the submission.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain event types for settings changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum SettingsEvent {
    /// The configuration was validated and saved
    ConfigSaved(ConfigSavedEvent),
    /// Local tracking-code caching was switched off
    CacheInvalidated(CacheInvalidatedEvent),
}

/// Event data for a saved configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSavedEvent {
    /// Tracker site identifier the configuration points at
    pub site_id: String,
    /// Whether this was the first save of the namespace
    pub first_save: bool,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event data for a cache invalidation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheInvalidatedEvent {
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

impl SettingsEvent {
    /// Create a new ConfigSaved event
    pub fn saved(site_id: &str, first_save: bool) -> Self {
        SettingsEvent::ConfigSaved(ConfigSavedEvent {
            site_id: site_id.to_string(),
            first_save,
            timestamp: Utc::now(),
        })
    }

    /// Create a new CacheInvalidated event
    pub fn cache_invalidated() -> Self {
        SettingsEvent::CacheInvalidated(CacheInvalidatedEvent {
            timestamp: Utc::now(),
        })
    }
}

/// Event publisher trait for publishing domain events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a settings event.
    async fn publish(&self, event: SettingsEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: SettingsEvent) -> anyhow::Result<()> {
        // No-op: events are not published
        Ok(())
    }
}
