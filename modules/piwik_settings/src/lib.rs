//! Piwik Settings Module
//!
//! Validated configuration collection and persistence for a Piwik
//! web-analytics tracking integration. The module renders a declarative
//! settings form schema, validates submissions (including a live
//! reachability probe of the configured tracker URLs), and writes accepted
//! values atomically to its configuration namespace.

// Public exports
pub mod contract;
pub use contract::{
    client::PiwikSettingsApi, error::SettingsError, Capabilities, CustomVariable, DomainMode,
    Environment, ErrorKind, FieldError, FieldSchema, JsScope, MessageKind, PageVisibility, Role,
    RoleVisibility, TrackerConfig, UserCustomization, VariableScope,
};

pub mod module;
pub use module::PiwikSettingsModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
