//! Field schema models
//!
//! The declarative output of schema rendering: an ordered list of form
//! sections the host form engine turns into widgets. Like the other
//! contract models these carry no serde derives; the REST layer maps them
//! to DTOs.

/// Ordered description of the settings form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub sections: Vec<Section>,
}

impl FieldSchema {
    /// Look up a field anywhere in the schema by id.
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.sections
            .iter()
            .flat_map(|section| section.fields.iter())
            .find(|field| field.id == id)
    }
}

/// A titled group of fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
}

/// One form field with its widget and current default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: String,
    pub label: String,
    pub control: Control,
    pub default: FieldValue,
    pub required: bool,
    pub disabled: bool,
    pub description: Option<String>,
}

/// Widget type and its presentation parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Text { size: u8, max_length: u16 },
    TextArea { rows: u8 },
    Checkbox,
    Radios { options: Vec<ChoiceOption> },
    Select { options: Vec<ChoiceOption> },
    Checkboxes { options: Vec<ChoiceOption> },
    /// Value carried through the form without a visible widget
    Hidden,
}

/// One selectable option of a radios/select/checkboxes control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
    pub description: Option<String>,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Current value rendered as a field default
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Choice(String),
    Many(Vec<String>),
}
