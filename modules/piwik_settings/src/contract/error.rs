//! Contract error types for the piwik settings module
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// Classification of a field-scoped validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Value fails a syntactic constraint
    Format,
    /// Outbound tracker probe failed, timed out, or returned non-200
    Reachability,
    /// Paired fields are inconsistent with each other
    Consistency,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::Reachability => "reachability",
            Self::Consistency => "consistency",
        }
    }
}

/// A validation failure scoped to a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field id the error is tagged to (for example `custom_var.3.name`)
    pub field: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ErrorKind::Format,
            message: message.into(),
        }
    }

    pub fn reachability(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ErrorKind::Reachability,
            message: message.into(),
        }
    }

    pub fn consistency(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ErrorKind::Consistency,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Settings module domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The submission failed validation; every failing field is listed
    Invalid {
        /// The complete, field-scoped error report
        errors: Vec<FieldError>,
    },
    /// The configuration store rejected the read or write
    Store {
        /// Store failure detail
        reason: String,
    },
    /// Internal error
    Internal,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { errors } => {
                write!(f, "Validation failed for {} field(s)", errors.len())
            }
            Self::Store { reason } => {
                write!(f, "Configuration store error: {}", reason)
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for SettingsError {}
