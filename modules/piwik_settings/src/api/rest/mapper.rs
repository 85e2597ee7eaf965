//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains the conversions between REST DTOs and the
//! transport-agnostic contract models. Parsing a submission collects a
//! field error per unreadable enum value instead of failing on the first.

use super::dto::*;
use crate::contract::{
    self, Capabilities, CustomVariable, CustomVariables, DomainMode, Environment, FieldError,
    JsScope, MessageKind, PageVisibility, Role, RoleVisibility, TrackerConfig, UserCustomization,
    VariableScope, CUSTOM_VAR_SLOTS,
};

// ===== Configuration conversions =====

impl From<TrackerConfig> for ConfigDto {
    fn from(config: TrackerConfig) -> Self {
        Self {
            site_id: config.site_id,
            url_http: config.url_http,
            url_https: config.url_https,
            domain_mode: config.domain_mode.as_str().to_string(),
            page_visibility: config.page_visibility.as_str().to_string(),
            pages: config.pages,
            role_visibility: config.role_visibility.as_str().to_string(),
            roles: config.roles.into_iter().collect(),
            user_customization: config.user_customization.as_str().to_string(),
            track_mailto: config.track_mailto,
            track_files: config.track_files,
            track_file_extensions: config.track_file_extensions,
            track_messages: config
                .track_messages
                .into_iter()
                .map(|kind| kind.as_str().to_string())
                .collect(),
            site_search: config.site_search,
            privacy_do_not_track: config.privacy_do_not_track,
            page_title_hierarchy: config.page_title_hierarchy,
            page_title_hierarchy_exclude_home: config.page_title_hierarchy_exclude_home,
            custom_vars: config
                .custom_vars
                .numbered()
                .map(|(number, slot)| CustomVariableDto {
                    slot: number as u8,
                    name: slot.name.clone(),
                    value: slot.value.clone(),
                    scope: slot.scope.as_str().to_string(),
                })
                .collect(),
            cache: config.cache,
            translation_set: config.translation_set,
            codesnippet_before: config.codesnippet_before,
            codesnippet_after: config.codesnippet_after,
            js_scope: config.js_scope.as_str().to_string(),
        }
    }
}

/// Parse a submitted configuration, collecting an error per field whose
/// enumerated value is not recognized.
pub fn config_from_dto(dto: ConfigDto) -> Result<TrackerConfig, Vec<FieldError>> {
    let mut errors = Vec::new();

    let domain_mode = parse_choice(&dto.domain_mode, DomainMode::parse, "domain_mode", &mut errors);
    let page_visibility = parse_choice(
        &dto.page_visibility,
        PageVisibility::parse,
        "page_visibility",
        &mut errors,
    );
    let role_visibility = parse_choice(
        &dto.role_visibility,
        RoleVisibility::parse,
        "role_visibility",
        &mut errors,
    );
    let user_customization = parse_choice(
        &dto.user_customization,
        UserCustomization::parse,
        "user_customization",
        &mut errors,
    );
    let js_scope = parse_choice(&dto.js_scope, JsScope::parse, "js_scope", &mut errors);

    let mut track_messages = std::collections::BTreeSet::new();
    for kind in &dto.track_messages {
        match MessageKind::parse(kind) {
            Some(parsed) => {
                track_messages.insert(parsed);
            }
            None => errors.push(unknown_value("track_messages", kind)),
        }
    }

    let mut custom_vars = CustomVariables::default();
    for (index, slot_dto) in dto.custom_vars.into_iter().take(CUSTOM_VAR_SLOTS).enumerate() {
        let scope = match VariableScope::parse(&slot_dto.scope) {
            Some(scope) => scope,
            None => {
                errors.push(unknown_value(
                    &format!("custom_var.{}.scope", index + 1),
                    &slot_dto.scope,
                ));
                VariableScope::default()
            }
        };
        custom_vars.slots[index] = CustomVariable {
            name: slot_dto.name,
            value: slot_dto.value,
            scope,
        };
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(TrackerConfig {
        site_id: dto.site_id,
        url_http: dto.url_http,
        url_https: dto.url_https,
        domain_mode,
        page_visibility,
        pages: dto.pages,
        role_visibility,
        roles: dto.roles.into_iter().collect(),
        user_customization,
        track_mailto: dto.track_mailto,
        track_files: dto.track_files,
        track_file_extensions: dto.track_file_extensions,
        track_messages,
        site_search: dto.site_search,
        privacy_do_not_track: dto.privacy_do_not_track,
        page_title_hierarchy: dto.page_title_hierarchy,
        page_title_hierarchy_exclude_home: dto.page_title_hierarchy_exclude_home,
        custom_vars,
        cache: dto.cache,
        translation_set: dto.translation_set,
        codesnippet_before: dto.codesnippet_before,
        codesnippet_after: dto.codesnippet_after,
        js_scope,
    })
}

fn parse_choice<T: Default>(
    value: &str,
    parse: fn(&str) -> Option<T>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> T {
    match parse(value) {
        Some(parsed) => parsed,
        None => {
            errors.push(unknown_value(field, value));
            T::default()
        }
    }
}

fn unknown_value(field: &str, value: &str) -> FieldError {
    FieldError::format(field, format!("Unknown value \"{value}\"."))
}

// ===== Environment conversions =====

impl From<EnvironmentDto> for Environment {
    fn from(dto: EnvironmentDto) -> Self {
        Self {
            host: dto.host,
            capabilities: Capabilities {
                search: dto.capabilities.search,
                translation: dto.capabilities.translation,
                expression: dto.capabilities.expression,
                token: dto.capabilities.token,
            },
            can_use_expression_visibility: dto.can_use_expression_visibility,
            roles: dto
                .roles
                .into_iter()
                .map(|role| Role {
                    id: role.id,
                    label: role.label,
                })
                .collect(),
        }
    }
}

// ===== Schema conversions =====

impl From<contract::FieldSchema> for SchemaDto {
    fn from(schema: contract::FieldSchema) -> Self {
        Self {
            sections: schema.sections.into_iter().map(SectionDto::from).collect(),
        }
    }
}

impl From<contract::Section> for SectionDto {
    fn from(section: contract::Section) -> Self {
        Self {
            id: section.id.to_string(),
            title: section.title,
            description: section.description,
            fields: section.fields.into_iter().map(FieldDto::from).collect(),
        }
    }
}

impl From<contract::Field> for FieldDto {
    fn from(field: contract::Field) -> Self {
        let (control, options, size, max_length, rows) = match field.control {
            contract::Control::Text { size, max_length } => {
                ("text", None, Some(size), Some(max_length), None)
            }
            contract::Control::TextArea { rows } => ("textarea", None, None, None, Some(rows)),
            contract::Control::Checkbox => ("checkbox", None, None, None, None),
            contract::Control::Radios { options } => {
                ("radios", Some(options), None, None, None)
            }
            contract::Control::Select { options } => {
                ("select", Some(options), None, None, None)
            }
            contract::Control::Checkboxes { options } => {
                ("checkboxes", Some(options), None, None, None)
            }
            contract::Control::Hidden => ("hidden", None, None, None, None),
        };

        Self {
            id: field.id,
            label: field.label,
            control: control.to_string(),
            options: options
                .map(|options| options.into_iter().map(OptionDto::from).collect()),
            default: field_value_json(field.default),
            required: field.required,
            disabled: field.disabled,
            description: field.description,
            size,
            max_length,
            rows,
        }
    }
}

impl From<contract::ChoiceOption> for OptionDto {
    fn from(option: contract::ChoiceOption) -> Self {
        Self {
            value: option.value,
            label: option.label,
            description: option.description,
        }
    }
}

fn field_value_json(value: contract::FieldValue) -> serde_json::Value {
    match value {
        contract::FieldValue::Text(text) => serde_json::Value::String(text),
        contract::FieldValue::Flag(flag) => serde_json::Value::Bool(flag),
        contract::FieldValue::Choice(choice) => serde_json::Value::String(choice),
        contract::FieldValue::Many(items) => serde_json::Value::Array(
            items.into_iter().map(serde_json::Value::String).collect(),
        ),
    }
}

// ===== Error conversions =====

impl From<&FieldError> for FieldErrorDto {
    fn from(error: &FieldError) -> Self {
        Self {
            field: error.field.clone(),
            kind: error.kind.as_str().to_string(),
            message: error.message.clone(),
        }
    }
}
