//! Schema rendering tests
//!
//! The builder is a pure function; these tests exercise the conditional
//! sections against different host environments.

use piwik_settings::contract::{Control, FieldValue};
use piwik_settings::domain::schema;
use piwik_settings::{PageVisibility, TrackerConfig};

mod common;
use common::{bare_environment, full_environment, valid_config};

fn radio_values(control: &Control) -> Vec<&str> {
    match control {
        Control::Radios { options } | Control::Checkboxes { options } => {
            options.iter().map(|option| option.value.as_str()).collect()
        }
        other => panic!("expected options control, got {other:?}"),
    }
}

#[test]
fn test_rendering_twice_yields_an_identical_schema() {
    let config = valid_config();
    let environment = full_environment();

    assert_eq!(
        schema::build(&config, &environment),
        schema::build(&config, &environment)
    );
}

#[test]
fn test_section_order_is_stable() {
    let rendered = schema::build(&TrackerConfig::default(), &full_environment());
    let ids: Vec<&str> = rendered.sections.iter().map(|section| section.id).collect();
    assert_eq!(
        ids,
        vec![
            "account",
            "domains",
            "pages",
            "roles",
            "users",
            "linktracking",
            "messages",
            "search",
            "privacy",
            "page_title_hierarchy",
            "custom_var",
            "advanced",
        ]
    );
}

#[test]
fn test_expression_option_needs_capability_and_permission() {
    let config = valid_config();

    let with_both = schema::build(&config, &full_environment());
    let field = with_both.field("page_visibility").unwrap();
    assert_eq!(
        radio_values(&field.control),
        vec!["exclude_listed", "include_listed", "expression"]
    );

    let mut no_permission = full_environment();
    no_permission.can_use_expression_visibility = false;
    let without = schema::build(&config, &no_permission);
    let field = without.field("page_visibility").unwrap();
    assert_eq!(
        radio_values(&field.control),
        vec!["exclude_listed", "include_listed"]
    );

    let mut no_capability = full_environment();
    no_capability.capabilities.expression = false;
    let without = schema::build(&config, &no_capability);
    let field = without.field("page_visibility").unwrap();
    assert_eq!(
        radio_values(&field.control),
        vec!["exclude_listed", "include_listed"]
    );
}

#[test]
fn test_stored_expression_rule_is_preserved_for_unprivileged_actors() {
    let config = TrackerConfig {
        page_visibility: PageVisibility::Expression,
        pages: "return true;".to_string(),
        ..valid_config()
    };

    let mut environment = full_environment();
    environment.can_use_expression_visibility = false;

    let rendered = schema::build(&config, &environment);
    let visibility = rendered.field("page_visibility").unwrap();
    assert_eq!(visibility.control, Control::Hidden);
    assert_eq!(
        visibility.default,
        FieldValue::Choice("expression".to_string())
    );

    let pages = rendered.field("pages").unwrap();
    assert_eq!(pages.control, Control::Hidden);
    assert_eq!(pages.default, FieldValue::Text("return true;".to_string()));
}

#[test]
fn test_privileged_actor_sees_the_stored_expression_editable() {
    let config = TrackerConfig {
        page_visibility: PageVisibility::Expression,
        pages: "return true;".to_string(),
        ..valid_config()
    };

    let rendered = schema::build(&config, &full_environment());
    let pages = rendered.field("pages").unwrap();
    assert_eq!(pages.control, Control::TextArea { rows: 10 });
    assert_eq!(pages.label, "Pages or code");
}

#[test]
fn test_site_search_is_force_disabled_without_the_capability() {
    let config = valid_config();

    let with_search = schema::build(&config, &full_environment());
    assert!(!with_search.field("site_search").unwrap().disabled);

    let without_search = schema::build(&config, &bare_environment());
    let field = without_search.field("site_search").unwrap();
    assert!(field.disabled);
    // The default still reflects the stored value.
    assert_eq!(field.default, FieldValue::Flag(false));
}

#[test]
fn test_translation_set_appears_only_with_the_capability() {
    let config = valid_config();

    assert!(schema::build(&config, &full_environment())
        .field("translation_set")
        .is_some());
    assert!(schema::build(&config, &bare_environment())
        .field("translation_set")
        .is_none());
}

#[test]
fn test_roles_field_lists_every_registry_role() {
    let mut config = valid_config();
    config.roles.insert("editor".to_string());

    let rendered = schema::build(&config, &full_environment());
    let field = rendered.field("roles").unwrap();
    assert_eq!(
        radio_values(&field.control),
        vec!["anonymous", "authenticated", "editor"]
    );
    assert_eq!(field.default, FieldValue::Many(vec!["editor".to_string()]));
}

#[test]
fn test_domain_examples_derive_from_the_request_host() {
    let rendered = schema::build(&valid_config(), &full_environment());
    let field = rendered.field("domain_mode").unwrap();

    let options = match &field.control {
        Control::Radios { options } => options,
        other => panic!("expected radios, got {other:?}"),
    };
    assert_eq!(
        options[0].description.as_deref(),
        Some("Domain: www.example.com")
    );
    assert_eq!(
        options[1].description.as_deref(),
        Some("Examples: www.example.com, app.example.com, shop.example.com")
    );
}

#[test]
fn test_custom_var_slots_render_in_order_with_defaults() {
    let mut config = valid_config();
    config.custom_vars.slots[1].name = "segment".to_string();
    config.custom_vars.slots[1].value = "premium".to_string();

    let rendered = schema::build(&config, &full_environment());
    assert_eq!(
        rendered.field("custom_var.2.name").unwrap().default,
        FieldValue::Text("segment".to_string())
    );
    assert_eq!(
        rendered.field("custom_var.2.value").unwrap().default,
        FieldValue::Text("premium".to_string())
    );
    assert_eq!(
        rendered.field("custom_var.5.scope").unwrap().default,
        FieldValue::Choice("visit".to_string())
    );
}

#[test]
fn test_extension_list_requirement_follows_the_download_toggle() {
    let tracking = valid_config();
    let rendered = schema::build(&tracking, &full_environment());
    assert!(rendered.field("track_file_extensions").unwrap().required);

    let not_tracking = TrackerConfig {
        track_files: false,
        ..valid_config()
    };
    let rendered = schema::build(&not_tracking, &full_environment());
    assert!(!rendered.field("track_file_extensions").unwrap().required);
}
