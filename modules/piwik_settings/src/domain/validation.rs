//! Submission normalization and validation
//!
//! Normalization is a pure trimming pass over the free-text fields;
//! validation is a pure check pass that accumulates every failing field
//! instead of stopping at the first. The reachability probe is run by the
//! service after these passes so the pure checks stay synchronous.

use crate::contract::{FieldError, TrackerConfig};
use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static SITE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("static pattern compiles"));

#[allow(clippy::expect_used)]
static SCRIPT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?script[^>]*>").expect("static pattern compiles"));

/// Trim the free-text fields of a submission.
///
/// An https URL that trims down to empty counts as absent.
pub fn normalize(mut submission: TrackerConfig) -> TrackerConfig {
    submission.site_id = submission.site_id.trim().to_string();
    submission.pages = submission.pages.trim().to_string();
    submission.codesnippet_before = submission.codesnippet_before.trim().to_string();
    submission.codesnippet_after = submission.codesnippet_after.trim().to_string();
    submission.url_https = submission
        .url_https
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty());

    for slot in &mut submission.custom_vars.slots {
        slot.name = slot.name.trim().to_string();
        slot.value = slot.value.trim().to_string();
    }

    submission
}

/// Run every pure check against a normalized submission.
///
/// Returns the complete list of field-scoped errors; an empty list means
/// the submission passed everything except the reachability probe, which
/// the caller runs separately.
pub fn validate(candidate: &TrackerConfig) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for (number, slot) in candidate.custom_vars.numbered() {
        if slot.name.is_empty() && !slot.value.is_empty() {
            errors.push(FieldError::consistency(
                format!("custom_var.{number}.name"),
                format!("Custom variable slot {number} requires a name when a value has been provided."),
            ));
        } else if !slot.name.is_empty() && slot.value.is_empty() {
            errors.push(FieldError::consistency(
                format!("custom_var.{number}.value"),
                format!("Custom variable slot {number} requires a value when a name has been provided."),
            ));
        }
    }

    if !SITE_ID.is_match(&candidate.site_id) {
        errors.push(FieldError::format(
            "site_id",
            "The site ID must contain only digits.",
        ));
    }

    if candidate.url_http.is_empty() {
        errors.push(FieldError::format(
            "url_http",
            "The tracker base URL is required.",
        ));
    }

    if candidate.track_files && candidate.track_file_extensions.trim().is_empty() {
        errors.push(FieldError::format(
            "track_file_extensions",
            "An extension list is required when download tracking is enabled.",
        ));
    }

    if contains_script_tag(&candidate.codesnippet_before) {
        errors.push(FieldError::format(
            "codesnippet_before",
            "Do not include <script> tags in the code snippet.",
        ));
    }
    if contains_script_tag(&candidate.codesnippet_after) {
        errors.push(FieldError::format(
            "codesnippet_after",
            "Do not include <script> tags in the code snippet.",
        ));
    }

    errors
}

/// Case-insensitive check for an opening or closing script tag.
pub fn contains_script_tag(snippet: &str) -> bool {
    SCRIPT_TAG.is_match(snippet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{ErrorKind, VariableScope};

    fn valid_config() -> TrackerConfig {
        TrackerConfig {
            site_id: "1".to_string(),
            url_http: "http://analytics.example.com/".to_string(),
            ..TrackerConfig::default()
        }
    }

    #[test]
    fn test_site_id_digits_only() {
        for accepted in ["0", "1", "42", "1234567890123456789"] {
            let config = TrackerConfig {
                site_id: accepted.to_string(),
                ..valid_config()
            };
            assert!(validate(&config).is_empty(), "{accepted} should pass");
        }

        for rejected in ["", "12a", "-5", "1.5", " 7", "seven"] {
            let config = TrackerConfig {
                site_id: rejected.to_string(),
                ..valid_config()
            };
            let errors = validate(&config);
            assert_eq!(errors.len(), 1, "{rejected:?} should fail");
            assert_eq!(errors[0].field, "site_id");
            assert_eq!(errors[0].kind, ErrorKind::Format);
        }
    }

    #[test]
    fn test_normalize_trims_text_fields() {
        let submission = TrackerConfig {
            site_id: "  123  ".to_string(),
            pages: "\nblog\nblog/*\n".to_string(),
            codesnippet_before: "  _paq.push(['a']);  ".to_string(),
            codesnippet_after: "\t_paq.push(['b']);\n".to_string(),
            ..valid_config()
        };

        let normalized = normalize(submission);
        assert_eq!(normalized.site_id, "123");
        assert_eq!(normalized.pages, "blog\nblog/*");
        assert_eq!(normalized.codesnippet_before, "_paq.push(['a']);");
        assert_eq!(normalized.codesnippet_after, "_paq.push(['b']);");
    }

    #[test]
    fn test_normalize_drops_blank_https_url() {
        let submission = TrackerConfig {
            url_https: Some("   ".to_string()),
            ..valid_config()
        };
        assert_eq!(normalize(submission).url_https, None);

        let submission = TrackerConfig {
            url_https: Some(" https://analytics.example.com/ ".to_string()),
            ..valid_config()
        };
        assert_eq!(
            normalize(submission).url_https.as_deref(),
            Some("https://analytics.example.com/")
        );
    }

    #[test]
    fn test_custom_var_slot_pairing() {
        let mut config = valid_config();
        config.custom_vars.slots[2].value = "premium".to_string();

        let errors = validate(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "custom_var.3.name");
        assert_eq!(errors[0].kind, ErrorKind::Consistency);

        let mut config = valid_config();
        config.custom_vars.slots[0].name = "segment".to_string();

        let errors = validate(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "custom_var.1.value");
    }

    #[test]
    fn test_custom_var_slot_both_or_neither_pass() {
        let mut config = valid_config();
        config.custom_vars.slots[0].name = "segment".to_string();
        config.custom_vars.slots[0].value = "premium".to_string();
        config.custom_vars.slots[0].scope = VariableScope::Page;
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_script_tag_rejected_case_insensitively() {
        assert!(!contains_script_tag("alert(1);"));
        assert!(!contains_script_tag("_paq.push(['trackGoal', 1]);"));
        assert!(contains_script_tag("<script>alert(1)</script>"));
        assert!(contains_script_tag("<SCRIPT >x"));
        assert!(contains_script_tag("</script>"));
        assert!(contains_script_tag("<script type=\"text/javascript\">"));

        for field in ["codesnippet_before", "codesnippet_after"] {
            let mut config = valid_config();
            match field {
                "codesnippet_before" => config.codesnippet_before = "<ScRiPt>x</script>".into(),
                _ => config.codesnippet_after = "<ScRiPt>x</script>".into(),
            }
            let errors = validate(&config);
            assert!(errors.iter().any(|e| e.field == field));
        }
    }

    #[test]
    fn test_extension_list_required_when_tracking_downloads() {
        let config = TrackerConfig {
            track_files: true,
            track_file_extensions: String::new(),
            ..valid_config()
        };
        let errors = validate(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "track_file_extensions");

        let config = TrackerConfig {
            track_files: false,
            track_file_extensions: String::new(),
            ..valid_config()
        };
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_errors_accumulate_across_fields() {
        let mut config = TrackerConfig {
            site_id: "12a".to_string(),
            url_http: String::new(),
            codesnippet_before: "<script>x</script>".to_string(),
            ..TrackerConfig::default()
        };
        config.custom_vars.slots[1].value = "orphan".to_string();

        let errors = validate(&config);
        let fields: Vec<&str> = errors.iter().map(|error| error.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "custom_var.2.name",
                "site_id",
                "url_http",
                "codesnippet_before"
            ]
        );
    }
}
