//! Settings form schema builder
//!
//! A pure function from (current configuration, host environment) to the
//! ordered field schema. Capability- and permission-dependent sections are
//! decided here and nowhere else; rendering the same inputs twice yields an
//! identical schema.

use crate::contract::{
    ChoiceOption, Control, Environment, Field, FieldSchema, FieldValue, PageVisibility, Section,
    TrackerConfig,
};

const SUBDOMAIN_EXAMPLES: [&str; 3] = ["www", "app", "shop"];

/// Build the full settings form schema.
pub fn build(config: &TrackerConfig, environment: &Environment) -> FieldSchema {
    FieldSchema {
        sections: vec![
            account_section(config),
            domains_section(config, environment),
            pages_section(config, environment),
            roles_section(config, environment),
            users_section(config),
            link_tracking_section(config),
            messages_section(config),
            search_section(config, environment),
            privacy_section(config),
            title_hierarchy_section(config),
            custom_var_section(config, environment),
            advanced_section(config, environment),
        ],
    }
}

fn account_section(config: &TrackerConfig) -> Section {
    Section {
        id: "account",
        title: "General settings".to_string(),
        description: None,
        fields: vec![
            Field {
                id: "site_id".to_string(),
                label: "Site ID".to_string(),
                control: Control::Text {
                    size: 15,
                    max_length: 20,
                },
                default: FieldValue::Text(config.site_id.clone()),
                required: true,
                disabled: false,
                description: Some(
                    "The numeric ID this site has in your tracker account.".to_string(),
                ),
            },
            Field {
                id: "url_http".to_string(),
                label: "Tracker HTTP URL".to_string(),
                control: Control::Text {
                    size: 80,
                    max_length: 255,
                },
                default: FieldValue::Text(config.url_http.clone()),
                required: true,
                disabled: false,
                description: Some(
                    "The URL to your tracker base directory, for example \
                     \"http://www.example.com/piwik/\"."
                        .to_string(),
                ),
            },
            Field {
                id: "url_https".to_string(),
                label: "Tracker HTTPS URL".to_string(),
                control: Control::Text {
                    size: 80,
                    max_length: 255,
                },
                default: FieldValue::Text(config.url_https.clone().unwrap_or_default()),
                required: false,
                disabled: false,
                description: Some(
                    "Required if you track an SSL-enabled website, for example \
                     \"https://www.example.com/piwik/\"."
                        .to_string(),
                ),
            },
        ],
    }
}

fn domains_section(config: &TrackerConfig, environment: &Environment) -> Section {
    let examples = subdomain_examples(&environment.host).join(", ");

    Section {
        id: "domains",
        title: "Domains".to_string(),
        description: None,
        fields: vec![Field {
            id: "domain_mode".to_string(),
            label: "What are you tracking?".to_string(),
            control: Control::Radios {
                options: vec![
                    ChoiceOption::new("single", "A single domain")
                        .with_description(format!("Domain: {}", environment.host)),
                    ChoiceOption::new("multi_subdomain", "One domain with multiple subdomains")
                        .with_description(format!("Examples: {examples}")),
                ],
            },
            default: FieldValue::Choice(config.domain_mode.as_str().to_string()),
            required: false,
            disabled: false,
            description: None,
        }],
    }
}

fn pages_section(config: &TrackerConfig, environment: &Environment) -> Section {
    let expression_allowed =
        environment.capabilities.expression && environment.can_use_expression_visibility;

    // A stored expression rule the current actor may not edit is carried
    // through as hidden values so a save cannot silently rewrite it.
    if config.page_visibility == PageVisibility::Expression && !expression_allowed {
        return Section {
            id: "pages",
            title: "Pages".to_string(),
            description: None,
            fields: vec![
                Field {
                    id: "page_visibility".to_string(),
                    label: "Add tracking to specific pages".to_string(),
                    control: Control::Hidden,
                    default: FieldValue::Choice(config.page_visibility.as_str().to_string()),
                    required: false,
                    disabled: false,
                    description: None,
                },
                Field {
                    id: "pages".to_string(),
                    label: "Pages".to_string(),
                    control: Control::Hidden,
                    default: FieldValue::Text(config.pages.clone()),
                    required: false,
                    disabled: false,
                    description: None,
                },
            ],
        };
    }

    let mut options = vec![
        ChoiceOption::new("exclude_listed", "Every page except the listed pages"),
        ChoiceOption::new("include_listed", "The listed pages only"),
    ];
    let mut pages_label = "Pages".to_string();
    let mut description = "Specify pages by their paths, one path per line. The '*' character \
                           is a wildcard; 'blog' matches the blog page and 'blog/*' every \
                           personal blog."
        .to_string();

    if expression_allowed {
        options.push(ChoiceOption::new(
            "expression",
            "Pages on which this code returns true (experts only)",
        ));
        pages_label = "Pages or code".to_string();
        description.push_str(
            " If the code option is chosen, enter an expression; an incorrect expression can \
             break the site.",
        );
    }

    Section {
        id: "pages",
        title: "Pages".to_string(),
        description: None,
        fields: vec![
            Field {
                id: "page_visibility".to_string(),
                label: "Add tracking to specific pages".to_string(),
                control: Control::Radios { options },
                default: FieldValue::Choice(config.page_visibility.as_str().to_string()),
                required: false,
                disabled: false,
                description: None,
            },
            Field {
                id: "pages".to_string(),
                label: pages_label,
                control: Control::TextArea { rows: 10 },
                default: FieldValue::Text(config.pages.clone()),
                required: false,
                disabled: false,
                description: Some(description),
            },
        ],
    }
}

fn roles_section(config: &TrackerConfig, environment: &Environment) -> Section {
    let role_options = environment
        .roles
        .iter()
        .map(|role| ChoiceOption::new(role.id.clone(), role.label.clone()))
        .collect();

    Section {
        id: "roles",
        title: "Roles".to_string(),
        description: None,
        fields: vec![
            Field {
                id: "role_visibility".to_string(),
                label: "Add tracking for specific roles".to_string(),
                control: Control::Radios {
                    options: vec![
                        ChoiceOption::new("include_selected", "Add to the selected roles only"),
                        ChoiceOption::new(
                            "exclude_selected",
                            "Add to every role except the selected ones",
                        ),
                    ],
                },
                default: FieldValue::Choice(config.role_visibility.as_str().to_string()),
                required: false,
                disabled: false,
                description: None,
            },
            Field {
                id: "roles".to_string(),
                label: "Roles".to_string(),
                control: Control::Checkboxes {
                    options: role_options,
                },
                default: FieldValue::Many(config.roles.iter().cloned().collect()),
                required: false,
                disabled: false,
                description: Some(
                    "If none of the roles are selected, all users will be tracked.".to_string(),
                ),
            },
        ],
    }
}

fn users_section(config: &TrackerConfig) -> Section {
    Section {
        id: "users",
        title: "Users".to_string(),
        description: None,
        fields: vec![Field {
            id: "user_customization".to_string(),
            label: "Allow users to customize tracking on their account page".to_string(),
            control: Control::Radios {
                options: vec![
                    ChoiceOption::new("none", "No customization allowed"),
                    ChoiceOption::new(
                        "opt_out",
                        "Tracking on by default, users with the opt-in or out permission can \
                         opt out",
                    ),
                    ChoiceOption::new(
                        "opt_in",
                        "Tracking off by default, users with the opt-in or out permission can \
                         opt in",
                    ),
                ],
            },
            default: FieldValue::Choice(config.user_customization.as_str().to_string()),
            required: false,
            disabled: false,
            description: None,
        }],
    }
}

fn link_tracking_section(config: &TrackerConfig) -> Section {
    Section {
        id: "linktracking",
        title: "Links and downloads".to_string(),
        description: None,
        fields: vec![
            Field {
                id: "track_mailto".to_string(),
                label: "Track clicks on mailto links".to_string(),
                control: Control::Checkbox,
                default: FieldValue::Flag(config.track_mailto),
                required: false,
                disabled: false,
                description: None,
            },
            Field {
                id: "track_files".to_string(),
                label: "Track clicks on outbound links and downloads for the following \
                        extensions"
                    .to_string(),
                control: Control::Checkbox,
                default: FieldValue::Flag(config.track_files),
                required: false,
                disabled: false,
                description: None,
            },
            Field {
                id: "track_file_extensions".to_string(),
                label: "List of download file extensions".to_string(),
                control: Control::Text {
                    size: 80,
                    max_length: 255,
                },
                default: FieldValue::Text(config.track_file_extensions.clone()),
                required: config.track_files,
                disabled: false,
                description: Some(
                    "Extensions separated by the | character, tracked when clicked. Regular \
                     expressions are supported."
                        .to_string(),
                ),
            },
        ],
    }
}

fn messages_section(config: &TrackerConfig) -> Section {
    Section {
        id: "messages",
        title: "Messages".to_string(),
        description: None,
        fields: vec![Field {
            id: "track_messages".to_string(),
            label: "Track messages of type".to_string(),
            control: Control::Checkboxes {
                options: vec![
                    ChoiceOption::new("status", "Status message"),
                    ChoiceOption::new("warning", "Warning message"),
                    ChoiceOption::new("error", "Error message"),
                ],
            },
            default: FieldValue::Many(
                config
                    .track_messages
                    .iter()
                    .map(|kind| kind.as_str().to_string())
                    .collect(),
            ),
            required: false,
            disabled: false,
            description: Some(
                "Each selected message type shown to users is tracked as one event.".to_string(),
            ),
        }],
    }
}

fn search_section(config: &TrackerConfig, environment: &Environment) -> Section {
    let state = if environment.capabilities.search {
        "enabled"
    } else {
        "disabled"
    };

    Section {
        id: "search",
        title: "Search".to_string(),
        description: None,
        fields: vec![Field {
            id: "site_search".to_string(),
            label: "Track internal search".to_string(),
            control: Control::Checkbox,
            default: FieldValue::Flag(config.site_search),
            required: false,
            disabled: !environment.capabilities.search,
            description: Some(format!(
                "If checked, internal search keywords are tracked. Requires: search ({state})."
            )),
        }],
    }
}

fn privacy_section(config: &TrackerConfig) -> Section {
    Section {
        id: "privacy",
        title: "Privacy".to_string(),
        description: None,
        fields: vec![Field {
            id: "privacy_do_not_track".to_string(),
            label: "Universal web tracking opt-out".to_string(),
            control: Control::Checkbox,
            default: FieldValue::Flag(config.privacy_do_not_track),
            required: false,
            disabled: false,
            description: Some(
                "If enabled, visitors sending the Do-Not-Track header are not tracked."
                    .to_string(),
            ),
        }],
    }
}

fn title_hierarchy_section(config: &TrackerConfig) -> Section {
    Section {
        id: "page_title_hierarchy",
        title: "Page titles hierarchy".to_string(),
        description: Some(
            "Enables an expandable tree view of page titles in the tracker statistics."
                .to_string(),
        ),
        fields: vec![
            Field {
                id: "page_title_hierarchy".to_string(),
                label: "Show page titles as hierarchy like breadcrumbs".to_string(),
                control: Control::Checkbox,
                default: FieldValue::Flag(config.page_title_hierarchy),
                required: false,
                disabled: false,
                description: None,
            },
            Field {
                id: "page_title_hierarchy_exclude_home".to_string(),
                label: "Hide home page from hierarchy".to_string(),
                control: Control::Checkbox,
                default: FieldValue::Flag(config.page_title_hierarchy_exclude_home),
                required: false,
                disabled: false,
                description: Some(
                    "Removes the home item so the hierarchy starts one level below it; hits to \
                     the home page are still counted."
                        .to_string(),
                ),
            },
        ],
    }
}

fn custom_var_section(config: &TrackerConfig, environment: &Environment) -> Section {
    let mut description = "Custom variables are added to every tracked page. Names and values \
                           are limited in length; keep them short."
        .to_string();
    if environment.capabilities.token {
        description.push_str(" Tokens may be used in custom variable names and values.");
    }

    let mut fields = Vec::new();
    for (number, slot) in config.custom_vars.numbered() {
        fields.push(Field {
            id: format!("custom_var.{number}.slot"),
            label: format!("Custom variable slot #{number}"),
            control: Control::Text {
                size: 1,
                max_length: 2,
            },
            default: FieldValue::Text(number.to_string()),
            required: false,
            disabled: true,
            description: None,
        });
        fields.push(Field {
            id: format!("custom_var.{number}.name"),
            label: format!("Custom variable name #{number}"),
            control: Control::Text {
                size: 20,
                max_length: 100,
            },
            default: FieldValue::Text(slot.name.clone()),
            required: false,
            disabled: false,
            description: None,
        });
        fields.push(Field {
            id: format!("custom_var.{number}.value"),
            label: format!("Custom variable value #{number}"),
            control: Control::Text {
                size: 20,
                max_length: 255,
            },
            default: FieldValue::Text(slot.value.clone()),
            required: false,
            disabled: false,
            description: None,
        });
        fields.push(Field {
            id: format!("custom_var.{number}.scope"),
            label: format!("Custom variable scope #{number}"),
            control: Control::Select {
                options: vec![
                    ChoiceOption::new("visit", "Visit"),
                    ChoiceOption::new("page", "Page"),
                ],
            },
            default: FieldValue::Choice(slot.scope.as_str().to_string()),
            required: false,
            disabled: false,
            description: None,
        });
    }

    Section {
        id: "custom_var",
        title: "Custom variables".to_string(),
        description: Some(description),
        fields,
    }
}

fn advanced_section(config: &TrackerConfig, environment: &Environment) -> Section {
    let mut fields = vec![Field {
        id: "cache".to_string(),
        label: "Locally cache tracking code file".to_string(),
        control: Control::Checkbox,
        default: FieldValue::Flag(config.cache),
        required: false,
        disabled: false,
        description: Some(
            "If checked, the tracking code file is retrieved from the tracker and cached \
             locally, refreshed daily."
                .to_string(),
        ),
    }];

    if environment.capabilities.translation {
        fields.push(Field {
            id: "translation_set".to_string(),
            label: "Track translation sets as one unit".to_string(),
            control: Control::Checkbox,
            default: FieldValue::Flag(config.translation_set),
            required: false,
            disabled: false,
            description: Some(
                "Record statistics for the originating node so a translation set is treated \
                 as a single unit."
                    .to_string(),
            ),
        });
    }

    fields.push(Field {
        id: "codesnippet_before".to_string(),
        label: "Code snippet (before)".to_string(),
        control: Control::TextArea { rows: 5 },
        default: FieldValue::Text(config.codesnippet_before.clone()),
        required: false,
        disabled: false,
        description: Some(
            "Added before the page-view call. Do not include <script> tags and always end \
             with a semicolon."
                .to_string(),
        ),
    });
    fields.push(Field {
        id: "codesnippet_after".to_string(),
        label: "Code snippet (after)".to_string(),
        control: Control::TextArea { rows: 5 },
        default: FieldValue::Text(config.codesnippet_after.clone()),
        required: false,
        disabled: false,
        description: Some("Added after the page-view call.".to_string()),
    });
    fields.push(Field {
        id: "js_scope".to_string(),
        label: "JavaScript scope".to_string(),
        control: Control::Select {
            options: vec![
                ChoiceOption::new("header", "Header"),
                ChoiceOption::new("footer", "Footer"),
            ],
        },
        default: FieldValue::Choice(config.js_scope.as_str().to_string()),
        required: false,
        disabled: false,
        description: Some("The header is recommended for performance reasons.".to_string()),
    });

    Section {
        id: "advanced",
        title: "Advanced settings".to_string(),
        description: None,
        fields,
    }
}

/// Example multi-subdomain hosts derived from the request host.
///
/// IP addresses, localhost, and bare hosts fall back to example.com so the
/// text never shows something like "www.127.0.0.1".
fn subdomain_examples(host: &str) -> Vec<String> {
    let labels: Vec<&str> = host.split('.').filter(|label| !label.is_empty()).collect();
    let numeric = !host.is_empty()
        && host
            .chars()
            .filter(|c| *c != '.')
            .all(|c| c.is_ascii_digit());

    let base = if numeric || labels.len() < 2 {
        "example.com".to_string()
    } else if labels.len() == 2 {
        labels.join(".")
    } else {
        labels[1..].join(".")
    };

    SUBDOMAIN_EXAMPLES
        .iter()
        .map(|subdomain| format!("{subdomain}.{base}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subdomain_examples_strip_the_first_label() {
        assert_eq!(
            subdomain_examples("www.example.com"),
            vec!["www.example.com", "app.example.com", "shop.example.com"]
        );
        assert_eq!(
            subdomain_examples("example.com"),
            vec!["www.example.com", "app.example.com", "shop.example.com"]
        );
    }

    #[test]
    fn test_subdomain_examples_fall_back_for_ips_and_localhost() {
        for host in ["127.0.0.1", "localhost", ""] {
            assert_eq!(
                subdomain_examples(host),
                vec!["www.example.com", "app.example.com", "shop.example.com"],
                "host {host:?}"
            );
        }
    }
}
