//! Domain layer - business logic and services

pub mod cache;
pub mod events;
pub mod probe;
pub mod repository;
pub mod schema;
pub mod service;
pub mod validation;

pub use cache::{NoOpTrackingCodeCache, TrackingCodeCache};
pub use events::{EventPublisher, NoOpEventPublisher, SettingsEvent};
pub use probe::{HttpReachabilityProbe, ProbeFailure, ReachabilityProbe, TRACKER_ENDPOINT};
pub use repository::ConfigRepository;
pub use service::Service;
