//! Storage mappers
//!
//! Conversions between the stored key/value rows and the contract
//! configuration model. Reading fills defaults for absent or unreadable
//! values so a configuration loaded from any store state is always
//! complete; writing emits every key so a saved namespace is always whole.

use crate::contract::{
    CustomVariable, CustomVariables, DomainMode, JsScope, MessageKind, PageVisibility,
    RoleVisibility, TrackerConfig, UserCustomization, VariableScope, CUSTOM_VAR_SLOTS,
};
use serde_json::{json, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Convert a configuration into its stored key/value form.
pub fn to_values(config: &TrackerConfig) -> BTreeMap<String, Value> {
    let custom_vars: Vec<CustomVariableJson> = config
        .custom_vars
        .slots
        .iter()
        .map(CustomVariableJson::from)
        .collect();

    BTreeMap::from([
        ("site_id".to_string(), json!(config.site_id)),
        ("url_http".to_string(), json!(config.url_http)),
        (
            "url_https".to_string(),
            json!(config.url_https.clone().unwrap_or_default()),
        ),
        (
            "domain_mode".to_string(),
            json!(config.domain_mode.as_str()),
        ),
        (
            "visibility_pages".to_string(),
            json!(config.page_visibility.as_str()),
        ),
        ("pages".to_string(), json!(config.pages)),
        (
            "visibility_roles".to_string(),
            json!(config.role_visibility.as_str()),
        ),
        ("roles".to_string(), json!(config.roles)),
        (
            "custom".to_string(),
            json!(config.user_customization.as_str()),
        ),
        ("trackmailto".to_string(), json!(config.track_mailto)),
        ("track".to_string(), json!(config.track_files)),
        (
            "trackfiles_extensions".to_string(),
            json!(config.track_file_extensions),
        ),
        (
            "trackmessages".to_string(),
            json!(config
                .track_messages
                .iter()
                .map(|kind| kind.as_str())
                .collect::<Vec<_>>()),
        ),
        ("site_search".to_string(), json!(config.site_search)),
        (
            "privacy_donottrack".to_string(),
            json!(config.privacy_do_not_track),
        ),
        (
            "page_title_hierarchy".to_string(),
            json!(config.page_title_hierarchy),
        ),
        (
            "page_title_hierarchy_exclude_home".to_string(),
            json!(config.page_title_hierarchy_exclude_home),
        ),
        ("custom_var".to_string(), json!(custom_vars)),
        ("cache".to_string(), json!(config.cache)),
        ("translation_set".to_string(), json!(config.translation_set)),
        (
            "codesnippet_before".to_string(),
            json!(config.codesnippet_before),
        ),
        (
            "codesnippet_after".to_string(),
            json!(config.codesnippet_after),
        ),
        ("js_scope".to_string(), json!(config.js_scope.as_str())),
    ])
}

/// Rebuild a configuration from stored rows, defaulting whatever is
/// absent or unreadable.
pub fn from_values(values: &BTreeMap<String, Value>) -> TrackerConfig {
    let defaults = TrackerConfig::default();

    TrackerConfig {
        site_id: string_or(values, "site_id", &defaults.site_id),
        url_http: string_or(values, "url_http", &defaults.url_http),
        url_https: Some(string_or(values, "url_https", ""))
            .filter(|url| !url.is_empty()),
        domain_mode: parsed_or(values, "domain_mode", DomainMode::parse, defaults.domain_mode),
        page_visibility: parsed_or(
            values,
            "visibility_pages",
            PageVisibility::parse,
            defaults.page_visibility,
        ),
        pages: string_or(values, "pages", &defaults.pages),
        role_visibility: parsed_or(
            values,
            "visibility_roles",
            RoleVisibility::parse,
            defaults.role_visibility,
        ),
        roles: string_set(values, "roles"),
        user_customization: parsed_or(
            values,
            "custom",
            UserCustomization::parse,
            defaults.user_customization,
        ),
        track_mailto: bool_or(values, "trackmailto", defaults.track_mailto),
        track_files: bool_or(values, "track", defaults.track_files),
        track_file_extensions: string_or(
            values,
            "trackfiles_extensions",
            &defaults.track_file_extensions,
        ),
        track_messages: message_kinds(values, "trackmessages"),
        site_search: bool_or(values, "site_search", defaults.site_search),
        privacy_do_not_track: bool_or(
            values,
            "privacy_donottrack",
            defaults.privacy_do_not_track,
        ),
        page_title_hierarchy: bool_or(
            values,
            "page_title_hierarchy",
            defaults.page_title_hierarchy,
        ),
        page_title_hierarchy_exclude_home: bool_or(
            values,
            "page_title_hierarchy_exclude_home",
            defaults.page_title_hierarchy_exclude_home,
        ),
        custom_vars: custom_variables(values, "custom_var"),
        cache: bool_or(values, "cache", defaults.cache),
        translation_set: bool_or(values, "translation_set", defaults.translation_set),
        codesnippet_before: string_or(values, "codesnippet_before", &defaults.codesnippet_before),
        codesnippet_after: string_or(values, "codesnippet_after", &defaults.codesnippet_after),
        js_scope: parsed_or(values, "js_scope", JsScope::parse, defaults.js_scope),
    }
}

// ===== JSON Serialization Helpers =====

/// JSON representation of one custom variable slot for storage
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct CustomVariableJson {
    name: String,
    value: String,
    scope: String,
}

impl From<&CustomVariable> for CustomVariableJson {
    fn from(slot: &CustomVariable) -> Self {
        Self {
            name: slot.name.clone(),
            value: slot.value.clone(),
            scope: slot.scope.as_str().to_string(),
        }
    }
}

impl From<CustomVariableJson> for CustomVariable {
    fn from(stored: CustomVariableJson) -> Self {
        Self {
            name: stored.name,
            value: stored.value,
            scope: VariableScope::parse(&stored.scope).unwrap_or_default(),
        }
    }
}

fn string_or(values: &BTreeMap<String, Value>, key: &str, default: &str) -> String {
    values
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn bool_or(values: &BTreeMap<String, Value>, key: &str, default: bool) -> bool {
    values.get(key).and_then(Value::as_bool).unwrap_or(default)
}

fn parsed_or<T>(
    values: &BTreeMap<String, Value>,
    key: &str,
    parse: fn(&str) -> Option<T>,
    default: T,
) -> T {
    values
        .get(key)
        .and_then(Value::as_str)
        .and_then(parse)
        .unwrap_or(default)
}

fn string_set(values: &BTreeMap<String, Value>, key: &str) -> BTreeSet<String> {
    values
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn message_kinds(values: &BTreeMap<String, Value>, key: &str) -> BTreeSet<MessageKind> {
    values
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(MessageKind::parse)
                .collect()
        })
        .unwrap_or_default()
}

fn custom_variables(values: &BTreeMap<String, Value>, key: &str) -> CustomVariables {
    let mut vars = CustomVariables::default();

    if let Some(stored) = values.get(key) {
        let slots: Vec<CustomVariableJson> =
            serde_json::from_value(stored.clone()).unwrap_or_default();
        for (slot, stored_slot) in vars.slots.iter_mut().zip(slots).take(CUSTOM_VAR_SLOTS) {
            *slot = stored_slot.into();
        }
    }

    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::DEFAULT_TRACKFILE_EXTENSIONS;

    #[test]
    fn test_empty_store_yields_defaults() {
        let config = from_values(&BTreeMap::new());
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.track_file_extensions, DEFAULT_TRACKFILE_EXTENSIONS);
        assert!(config.track_mailto);
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let mut config = TrackerConfig {
            site_id: "42".to_string(),
            url_http: "http://analytics.example.com/".to_string(),
            url_https: Some("https://analytics.example.com/".to_string()),
            domain_mode: DomainMode::MultiSubdomain,
            page_visibility: PageVisibility::IncludeListed,
            pages: "blog\nblog/*".to_string(),
            role_visibility: RoleVisibility::ExcludeSelected,
            roles: BTreeSet::from(["editor".to_string(), "anonymous".to_string()]),
            user_customization: UserCustomization::OptOut,
            track_messages: BTreeSet::from([MessageKind::Error, MessageKind::Warning]),
            cache: true,
            js_scope: JsScope::Footer,
            ..TrackerConfig::default()
        };
        config.custom_vars.slots[0] = CustomVariable {
            name: "segment".to_string(),
            value: "premium".to_string(),
            scope: VariableScope::Page,
        };

        assert_eq!(from_values(&to_values(&config)), config);
    }

    #[test]
    fn test_unreadable_values_fall_back_to_defaults() {
        let values = BTreeMap::from([
            ("domain_mode".to_string(), json!("sideways")),
            ("trackmailto".to_string(), json!("yes")),
            ("custom_var".to_string(), json!(17)),
        ]);

        let config = from_values(&values);
        assert_eq!(config.domain_mode, DomainMode::Single);
        assert!(config.track_mailto);
        assert_eq!(config.custom_vars, CustomVariables::default());
    }

    #[test]
    fn test_blank_https_url_reads_as_absent() {
        let values = BTreeMap::from([("url_https".to_string(), json!(""))]);
        assert_eq!(from_values(&values).url_https, None);
    }
}
