//! Common test utilities

use piwik_settings::{Capabilities, Environment, Role, TrackerConfig};

/// Environment with every capability present and the expression permission
/// granted, as on a fully equipped host.
#[allow(dead_code)]
pub fn full_environment() -> Environment {
    Environment {
        host: "www.example.com".to_string(),
        capabilities: Capabilities {
            search: true,
            translation: true,
            expression: true,
            token: true,
        },
        can_use_expression_visibility: true,
        roles: vec![
            Role {
                id: "anonymous".to_string(),
                label: "Anonymous user".to_string(),
            },
            Role {
                id: "authenticated".to_string(),
                label: "Authenticated user".to_string(),
            },
            Role {
                id: "editor".to_string(),
                label: "Editor".to_string(),
            },
        ],
    }
}

/// Minimal host: no optional capabilities, no expression permission.
#[allow(dead_code)]
pub fn bare_environment() -> Environment {
    Environment {
        host: "localhost".to_string(),
        capabilities: Capabilities::default(),
        can_use_expression_visibility: false,
        roles: vec![
            Role {
                id: "anonymous".to_string(),
                label: "Anonymous user".to_string(),
            },
            Role {
                id: "authenticated".to_string(),
                label: "Authenticated user".to_string(),
            },
        ],
    }
}

/// A submission that passes every pure check.
#[allow(dead_code)]
pub fn valid_config() -> TrackerConfig {
    TrackerConfig {
        site_id: "42".to_string(),
        url_http: "http://analytics.example.com/".to_string(),
        ..TrackerConfig::default()
    }
}
