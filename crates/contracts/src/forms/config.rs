use serde::{Deserialize, Serialize};

use super::data::FormData;
use super::field::FormField;
use super::validation::FieldErrors;

pub const DEFAULT_SUBMIT_TEXT: &str = "Submit";
pub const DEFAULT_CANCEL_TEXT: &str = "Cancel";

/// Shape of one form: its fields and button labels
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormConfig {
    pub id: String,
    pub title: String,
    pub fields: Vec<FormField>,
    #[serde(rename = "submitText", default, skip_serializing_if = "Option::is_none")]
    pub submit_text: Option<String>,
    #[serde(rename = "cancelText", default, skip_serializing_if = "Option::is_none")]
    pub cancel_text: Option<String>,
}

impl FormConfig {
    pub fn new(id: impl Into<String>, title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fields,
            submit_text: None,
            cancel_text: None,
        }
    }

    pub fn with_buttons(mut self, submit: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.submit_text = Some(submit.into());
        self.cancel_text = Some(cancel.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn submit_label(&self) -> &str {
        self.submit_text.as_deref().unwrap_or(DEFAULT_SUBMIT_TEXT)
    }

    pub fn cancel_label(&self) -> &str {
        self.cancel_text.as_deref().unwrap_or(DEFAULT_CANCEL_TEXT)
    }

    /// Data with every field at its type's starting value
    pub fn empty_data(&self) -> FormData {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.default_value()))
            .collect()
    }

    /// Check every field; missing values are checked as the field's default
    pub fn check(&self, data: &FormData) -> Result<(), FieldErrors> {
        let errors: FieldErrors = self
            .fields
            .iter()
            .filter_map(|field| {
                let fallback = field.default_value();
                let value = data.get(&field.name).unwrap_or(&fallback);
                field
                    .check(value)
                    .err()
                    .map(|e| (field.name.clone(), e))
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FieldType, FieldValidation, FieldValue, ValidationError};

    fn contact() -> FormConfig {
        FormConfig::new(
            "contact",
            "Contact",
            vec![
                FormField::new("name", "Name", FieldType::Input).required(),
                FormField::new("email", "Email", FieldType::Input)
                    .required()
                    .with_validation(FieldValidation::default().pattern(r"^\S+@\S+$")),
                FormField::new("subscribe", "Subscribe", FieldType::Checkbox),
            ],
        )
    }

    #[test]
    fn test_button_labels_default() {
        let config = contact();
        assert_eq!(config.submit_label(), "Submit");
        assert_eq!(config.cancel_label(), "Cancel");

        let config = config.with_buttons("Send", "Reset");
        assert_eq!(config.submit_label(), "Send");
        assert_eq!(config.cancel_label(), "Reset");
    }

    #[test]
    fn test_empty_data() {
        let data = contact().empty_data();
        assert_eq!(data.len(), 3);
        assert_eq!(data.get("name"), Some(&FieldValue::text("")));
        assert_eq!(data.get("subscribe"), Some(&FieldValue::Bool(false)));
    }

    #[test]
    fn test_check_collects_all_errors() {
        let config = contact();
        let mut data = FormData::new();
        data.insert("email", "nope");

        let errors = config.check(&data).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some(&ValidationError::Required));
        assert_eq!(errors.get("email"), Some(&ValidationError::PatternMismatch));

        data.insert("name", "Alice");
        data.insert("email", "a@x.com");
        assert!(config.check(&data).is_ok());
    }

    #[test]
    fn test_field_lookup() {
        let config = contact();
        assert_eq!(
            config.field("email").map(|f| f.label.as_str()),
            Some("Email")
        );
        assert!(config.field("phone").is_none());
    }
}
