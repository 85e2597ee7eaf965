//! Hook for the locally cached tracking-code file
//!
//! When local caching is switched off, the stale cached copy of the
//! tracker script must be dropped. The owner of that cache is an external
//! collaborator; the module only signals it.

use async_trait::async_trait;

/// Port for clearing the cached tracker script copy
#[async_trait]
pub trait TrackingCodeCache: Send + Sync {
    /// Remove the locally cached tracking-code file.
    async fn clear(&self) -> anyhow::Result<()>;
}

/// No-op cache hook for testing or hosts without local caching
pub struct NoOpTrackingCodeCache;

#[async_trait]
impl TrackingCodeCache for NoOpTrackingCodeCache {
    async fn clear(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
