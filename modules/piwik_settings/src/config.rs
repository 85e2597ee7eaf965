//! Configuration for the piwik settings module

use serde::Deserialize;

/// Piwik settings module configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Per-request timeout for the tracker reachability probe, in seconds
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// User agent sent with the reachability probe
    #[serde(default = "default_probe_user_agent")]
    pub probe_user_agent: String,

    /// Probe the configured tracker URLs on submission (disable for
    /// air-gapped installations)
    #[serde(default = "default_true")]
    pub validate_tracker_reachability: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            probe_timeout_secs: default_probe_timeout_secs(),
            probe_user_agent: default_probe_user_agent(),
            validate_tracker_reachability: true,
        }
    }
}

fn default_probe_timeout_secs() -> u64 {
    3
}

fn default_probe_user_agent() -> String {
    "piwik-settings/0.1".to_string()
}

fn default_true() -> bool {
    true
}
