//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Configuration DTOs =====

/// Tracker configuration payload
///
/// Serves both as the GET response and the PUT request body; a PUT
/// replaces the whole record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConfigDto {
    /// Numeric tracker site identifier
    #[schema(example = "1")]
    pub site_id: String,

    /// Tracker base URL over HTTP
    #[schema(example = "http://www.example.com/piwik/")]
    pub url_http: String,

    /// Tracker base URL over HTTPS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_https: Option<String>,

    /// Cookie scope: "single" or "multi_subdomain"
    #[schema(example = "single")]
    pub domain_mode: String,

    /// Page rule mode: "exclude_listed", "include_listed" or "expression"
    pub page_visibility: String,

    /// Newline-delimited path patterns, or a code expression
    #[serde(default)]
    pub pages: String,

    /// Role rule mode: "include_selected" or "exclude_selected"
    pub role_visibility: String,

    /// Selected role identifiers
    #[serde(default)]
    pub roles: Vec<String>,

    /// Account customization policy: "none", "opt_out" or "opt_in"
    pub user_customization: String,

    /// Track clicks on mailto links
    pub track_mailto: bool,

    /// Track clicks on outbound links and downloads
    pub track_files: bool,

    /// Pipe-delimited download extension list
    pub track_file_extensions: String,

    /// Tracked message types ("status", "warning", "error")
    #[serde(default)]
    pub track_messages: Vec<String>,

    /// Track internal search keywords
    pub site_search: bool,

    /// Honour the Do-Not-Track header
    pub privacy_do_not_track: bool,

    /// Record page titles as a breadcrumb hierarchy
    pub page_title_hierarchy: bool,

    /// Drop the home item from the title hierarchy
    pub page_title_hierarchy_exclude_home: bool,

    /// The five custom variable slots, in slot order
    #[serde(default)]
    pub custom_vars: Vec<CustomVariableDto>,

    /// Cache the tracking code file locally
    pub cache: bool,

    /// Track translation sets as one unit
    #[serde(default)]
    pub translation_set: bool,

    /// Snippet inserted before the page-view call
    #[serde(default)]
    pub codesnippet_before: String,

    /// Snippet inserted after the page-view call
    #[serde(default)]
    pub codesnippet_after: String,

    /// Tracking code placement: "header" or "footer"
    pub js_scope: String,
}

/// One custom variable slot
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomVariableDto {
    /// 1-based slot number (informational on input)
    #[serde(default)]
    pub slot: u8,

    /// Custom variable name
    #[serde(default)]
    pub name: String,

    /// Custom variable value
    #[serde(default)]
    pub value: String,

    /// Variable scope: "visit" or "page"
    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_scope() -> String {
    "visit".to_string()
}

// ===== Environment DTOs =====

/// Host environment snapshot for schema rendering
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EnvironmentDto {
    /// Host name of the current request
    #[serde(default)]
    #[schema(example = "www.example.com")]
    pub host: String,

    /// Optional host features
    #[serde(default)]
    pub capabilities: CapabilitiesDto,

    /// Whether the actor may use code-expression visibility rules
    #[serde(default)]
    pub can_use_expression_visibility: bool,

    /// Roles defined in the host system
    #[serde(default)]
    pub roles: Vec<RoleDto>,
}

/// Optional host features
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CapabilitiesDto {
    #[serde(default)]
    pub search: bool,
    #[serde(default)]
    pub translation: bool,
    #[serde(default)]
    pub expression: bool,
    #[serde(default)]
    pub token: bool,
}

/// A role known to the host role registry
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RoleDto {
    pub id: String,
    pub label: String,
}

// ===== Schema DTOs =====

/// Rendered settings form schema
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SchemaDto {
    /// Ordered form sections
    pub sections: Vec<SectionDto>,
}

/// One titled group of fields
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SectionDto {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<FieldDto>,
}

/// One form field
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldDto {
    pub id: String,
    pub label: String,

    /// Widget type: "text", "textarea", "checkbox", "radios", "select",
    /// "checkboxes" or "hidden"
    pub control: String,

    /// Options for radios/select/checkboxes controls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionDto>>,

    /// Current value rendered as the field default
    pub default: serde_json::Value,

    pub required: bool,
    pub disabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u8>,
}

/// One selectable option
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OptionDto {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ===== Error DTOs =====

/// One field-scoped validation error
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldErrorDto {
    /// Field id the error is tagged to
    #[schema(example = "site_id")]
    pub field: String,

    /// Error class: "format", "reachability" or "consistency"
    pub kind: String,

    /// Human-readable message
    pub message: String,
}

// Note: Conversion implementations live in mapper.rs per module guidelines
