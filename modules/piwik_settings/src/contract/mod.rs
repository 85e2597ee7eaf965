//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;
pub mod schema;

pub use client::PiwikSettingsApi;
pub use error::{ErrorKind, FieldError, SettingsError};
pub use model::{
    Capabilities, CustomVariable, CustomVariables, DomainMode, Environment, JsScope, MessageKind,
    PageVisibility, Role, RoleVisibility, TrackerConfig, UserCustomization, VariableScope,
    CUSTOM_VAR_SLOTS, DEFAULT_TRACKFILE_EXTENSIONS,
};
pub use schema::{ChoiceOption, Control, Field, FieldSchema, FieldValue, Section};
