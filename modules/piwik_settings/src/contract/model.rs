//! Contract models for the piwik settings module
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use std::collections::BTreeSet;

/// Number of custom variable slots supported by the tracker.
pub const CUSTOM_VAR_SLOTS: usize = 5;

/// Default pipe-delimited extension list tracked on file download links.
pub const DEFAULT_TRACKFILE_EXTENSIONS: &str = "7z|aac|arc|arj|asf|asx|avi|bin|csv|doc(x|m)?|dot(x|m)?|exe|flv|gif|gz|gzip|hqx|jar|jpe?g|js|mp(2|3|4|e?g)|mov(ie)?|msi|msp|pdf|phps|png|ppt(x|m)?|pot(x|m)?|pps(x|m)?|ppam|sld(x|m)?|thmx|qtm?|ra(m|r)?|sea|sit|tar|tgz|torrent|txt|wav|wma|wmv|wpd|xls(x|m|b)?|xlt(x|m)|xlam|xml|z|zip";

/// Tracker configuration record
///
/// A flat mapping of every setting the tracking snippet emitter reads.
/// Every field has a durable default; values absent from the store fall
/// back to `Default` at read time and are never null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Numeric tracker site identifier (kept as text, digits only)
    pub site_id: String,
    /// Base URL of the tracker over HTTP, with trailing slash
    pub url_http: String,
    /// Base URL of the tracker over HTTPS, when the site serves SSL pages
    pub url_https: Option<String>,
    /// Single-domain or multi-subdomain cookie scope
    pub domain_mode: DomainMode,
    /// How the `pages` list is interpreted
    pub page_visibility: PageVisibility,
    /// Newline-delimited path patterns, or a code expression
    pub pages: String,
    /// Whether `roles` selects or excludes tracked roles
    pub role_visibility: RoleVisibility,
    /// Role identifiers the visibility rule applies to
    pub roles: BTreeSet<String>,
    /// Per-account tracking opt-in/out policy
    pub user_customization: UserCustomization,
    /// Track clicks on mailto links
    pub track_mailto: bool,
    /// Track clicks on outbound links and file downloads
    pub track_files: bool,
    /// Pipe-delimited extension list for download tracking
    pub track_file_extensions: String,
    /// Host message types tracked as events
    pub track_messages: BTreeSet<MessageKind>,
    /// Track internal search keywords
    pub site_search: bool,
    /// Honour the Do-Not-Track browser header
    pub privacy_do_not_track: bool,
    /// Record page titles as a breadcrumb hierarchy
    pub page_title_hierarchy: bool,
    /// Drop the home item from the title hierarchy
    pub page_title_hierarchy_exclude_home: bool,
    /// The custom variable slots forwarded to the tracker
    pub custom_vars: CustomVariables,
    /// Cache the tracking code file locally
    pub cache: bool,
    /// Record statistics for the originating node of a translation set
    pub translation_set: bool,
    /// Snippet inserted before the page-view call
    pub codesnippet_before: String,
    /// Snippet inserted after the page-view call
    pub codesnippet_after: String,
    /// Where the tracking code is emitted in the page
    pub js_scope: JsScope,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            site_id: String::new(),
            url_http: String::new(),
            url_https: None,
            domain_mode: DomainMode::Single,
            page_visibility: PageVisibility::ExcludeListed,
            pages: String::new(),
            role_visibility: RoleVisibility::IncludeSelected,
            roles: BTreeSet::new(),
            user_customization: UserCustomization::None,
            track_mailto: true,
            track_files: true,
            track_file_extensions: DEFAULT_TRACKFILE_EXTENSIONS.to_string(),
            track_messages: BTreeSet::new(),
            site_search: false,
            privacy_do_not_track: true,
            page_title_hierarchy: false,
            page_title_hierarchy_exclude_home: true,
            custom_vars: CustomVariables::default(),
            cache: false,
            translation_set: false,
            codesnippet_before: String::new(),
            codesnippet_after: String::new(),
            js_scope: JsScope::Header,
        }
    }
}

/// Cookie scope of the tracked site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainMode {
    #[default]
    Single,
    MultiSubdomain,
}

impl DomainMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MultiSubdomain => "multi_subdomain",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "single" => Some(Self::Single),
            "multi_subdomain" => Some(Self::MultiSubdomain),
            _ => None,
        }
    }
}

/// Interpretation of the `pages` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageVisibility {
    /// Track every page except the listed ones
    #[default]
    ExcludeListed,
    /// Track the listed pages only
    IncludeListed,
    /// Track pages on which the stored code expression evaluates to true
    Expression,
}

impl PageVisibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExcludeListed => "exclude_listed",
            Self::IncludeListed => "include_listed",
            Self::Expression => "expression",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "exclude_listed" => Some(Self::ExcludeListed),
            "include_listed" => Some(Self::IncludeListed),
            "expression" => Some(Self::Expression),
            _ => None,
        }
    }
}

/// Interpretation of the `roles` set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleVisibility {
    /// Track the selected roles only
    #[default]
    IncludeSelected,
    /// Track every role except the selected ones
    ExcludeSelected,
}

impl RoleVisibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IncludeSelected => "include_selected",
            Self::ExcludeSelected => "exclude_selected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "include_selected" => Some(Self::IncludeSelected),
            "exclude_selected" => Some(Self::ExcludeSelected),
            _ => None,
        }
    }
}

/// Per-account tracking customization policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserCustomization {
    /// No customization allowed
    #[default]
    None,
    /// Tracking on by default, privileged users may opt out
    OptOut,
    /// Tracking off by default, privileged users may opt in
    OptIn,
}

impl UserCustomization {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::OptOut => "opt_out",
            Self::OptIn => "opt_in",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "opt_out" => Some(Self::OptOut),
            "opt_in" => Some(Self::OptIn),
            _ => None,
        }
    }
}

/// Host message types that can be tracked as events
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MessageKind {
    Status,
    Warning,
    Error,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "status" => Some(Self::Status),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Placement of the tracking code in the rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsScope {
    #[default]
    Header,
    Footer,
}

impl JsScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Footer => "footer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "header" => Some(Self::Header),
            "footer" => Some(Self::Footer),
            _ => None,
        }
    }
}

/// Scope of a custom variable slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariableScope {
    #[default]
    Visit,
    Page,
}

impl VariableScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visit => "visit",
            Self::Page => "page",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "visit" => Some(Self::Visit),
            "page" => Some(Self::Page),
            _ => None,
        }
    }
}

/// One custom variable slot
///
/// Name and value must be both empty or both non-empty; the pair is
/// forwarded to the tracker for visitor segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomVariable {
    pub name: String,
    pub value: String,
    pub scope: VariableScope,
}

/// The fixed set of custom variable slots
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomVariables {
    pub slots: [CustomVariable; CUSTOM_VAR_SLOTS],
}

impl CustomVariables {
    /// Iterate slots with their 1-based slot number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &CustomVariable)> {
        self.slots.iter().enumerate().map(|(i, slot)| (i + 1, slot))
    }
}

/// Optional host features that gate parts of the settings form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Internal search is available
    pub search: bool,
    /// Content translation sets are available
    pub translation: bool,
    /// Code-expression page visibility rules can be evaluated
    pub expression: bool,
    /// Token substitution is available for custom variable values
    pub token: bool,
}

/// A role known to the host role registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: String,
    pub label: String,
}

/// Host environment snapshot passed into schema rendering
///
/// Everything the form depends on is carried here explicitly; the module
/// never reaches into ambient host state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Environment {
    /// Host name of the current request, used for example text
    pub host: String,
    /// Optional host features present in this installation
    pub capabilities: Capabilities,
    /// Whether the current actor may use code-expression visibility rules
    pub can_use_expression_visibility: bool,
    /// Every role defined in the host system
    pub roles: Vec<Role>,
}
