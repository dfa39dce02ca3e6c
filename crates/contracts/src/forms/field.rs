//! Field descriptors for dynamically rendered forms

use serde::{Deserialize, Serialize};

use super::data::FieldValue;
use super::validation::{FieldValidation, ValidationError};

/// Kind of input element a field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Input,    // single-line text
    Select,   // one of `options`
    Checkbox, // boolean flag
    Textarea, // multi-line text
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Textarea => "textarea",
        }
    }

    /// Value a freshly rendered field of this type starts with
    pub fn default_value(&self) -> FieldValue {
        match self {
            Self::Checkbox => FieldValue::Bool(false),
            _ => FieldValue::Text(String::new()),
        }
    }
}

/// A (label, value) choice for select fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Describes one input element of a form.
///
/// Never mutated at runtime; pages build these once and render them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
    #[serde(rename = "errorMessage", default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl FormField {
    /// Field whose id and name are both `name`
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            label: label.into(),
            field_type,
            ..Default::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_validation(mut self, validation: FieldValidation) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn options(&self) -> &[FieldOption] {
        self.options.as_deref().unwrap_or_default()
    }

    pub fn default_value(&self) -> FieldValue {
        self.field_type.default_value()
    }

    /// Check `value` against the `required` flag and the validation descriptor
    pub fn check(&self, value: &FieldValue) -> Result<(), ValidationError> {
        if value.is_blank() {
            return if self.required {
                Err(ValidationError::Required)
            } else {
                Ok(())
            };
        }
        match &self.validation {
            Some(rules) => rules.check(value),
            None => Ok(()),
        }
    }

    /// Text shown to the user for a failed check
    pub fn error_text(&self, error: &ValidationError) -> String {
        self.error_message
            .clone()
            .unwrap_or_else(|| format!("{}: {}", self.label, error))
    }
}
