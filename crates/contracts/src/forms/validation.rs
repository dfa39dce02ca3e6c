//! Validation descriptors for form fields

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::data::FieldValue;

/// Why a field value was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("this field is required")]
    Required,
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("must be at most {max} characters")]
    TooLong { max: usize },
    #[error("does not match the expected format")]
    PatternMismatch,
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("value is not accepted")]
    Custom,
}

/// Failed checks of a whole form, keyed by field name
pub type FieldErrors = BTreeMap<String, ValidationError>;

/// Predicate supplied in code; not part of the serialized descriptor
#[derive(Clone, Copy)]
pub struct CustomRule(pub fn(&FieldValue) -> bool);

impl CustomRule {
    pub fn accepts(&self, value: &FieldValue) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomRule(..)")
    }
}

impl PartialEq for CustomRule {
    fn eq(&self, other: &Self) -> bool {
        self.0 as usize == other.0 as usize
    }
}

/// Constraints attached to a field.
///
/// Length bounds and the pattern apply to text values only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(rename = "minLength", default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(rename = "maxLength", default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip)]
    pub custom: Option<CustomRule>,
}

impl FieldValidation {
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn custom(mut self, rule: fn(&FieldValue) -> bool) -> Self {
        self.custom = Some(CustomRule(rule));
        self
    }

    /// Validate a value against the rules, first failure wins
    pub fn check(&self, value: &FieldValue) -> Result<(), ValidationError> {
        if let Some(text) = value.as_text() {
            let len = text.chars().count();
            if let Some(min) = self.min_length {
                if len < min {
                    return Err(ValidationError::TooShort { min });
                }
            }
            if let Some(max) = self.max_length {
                if len > max {
                    return Err(ValidationError::TooLong { max });
                }
            }
            if let Some(pattern) = &self.pattern {
                let re = Regex::new(pattern).map_err(|e| ValidationError::InvalidPattern {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })?;
                if !re.is_match(text) {
                    return Err(ValidationError::PatternMismatch);
                }
            }
        }

        if let Some(rule) = &self.custom {
            if !rule.accepts(value) {
                return Err(ValidationError::Custom);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_spaces(value: &FieldValue) -> bool {
        value.as_text().map_or(true, |t| !t.contains(' '))
    }

    #[test]
    fn test_length_bounds_count_chars() {
        let rules = FieldValidation::default().min_length(2).max_length(4);
        assert_eq!(
            rules.check(&FieldValue::text("a")),
            Err(ValidationError::TooShort { min: 2 })
        );
        assert!(rules.check(&FieldValue::text("ёжик")).is_ok());
        assert_eq!(
            rules.check(&FieldValue::text("abcde")),
            Err(ValidationError::TooLong { max: 4 })
        );
    }

    #[test]
    fn test_pattern() {
        let rules = FieldValidation::default().pattern(r"^[^@\s]+@[^@\s]+\.[^@\s]+$");
        assert!(rules.check(&FieldValue::text("a@x.com")).is_ok());
        assert_eq!(
            rules.check(&FieldValue::text("not-an-email")),
            Err(ValidationError::PatternMismatch)
        );
    }

    #[test]
    fn test_unanchored_pattern_searches() {
        let search = FieldValidation::default().pattern(r"\d{3}");
        assert!(search.check(&FieldValue::text("call 555 now")).is_ok());

        let full = FieldValidation::default().pattern(r"^\d{3}$");
        assert_eq!(
            full.check(&FieldValue::text("call 555 now")),
            Err(ValidationError::PatternMismatch)
        );
        assert!(full.check(&FieldValue::text("555")).is_ok());
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let rules = FieldValidation::default().pattern("(");
        match rules.check(&FieldValue::text("x")) {
            Err(ValidationError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "("),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_custom_rule() {
        let rules = FieldValidation::default().custom(no_spaces);
        assert!(rules.check(&FieldValue::text("alice")).is_ok());
        assert_eq!(
            rules.check(&FieldValue::text("alice smith")),
            Err(ValidationError::Custom)
        );
    }

    #[test]
    fn test_text_rules_ignore_non_text_values() {
        let rules = FieldValidation::default().min_length(10).pattern("^x$");
        assert!(rules.check(&FieldValue::Bool(true)).is_ok());
    }

    #[test]
    fn test_custom_rule_is_not_serialized() {
        let rules = FieldValidation::default().max_length(5).custom(no_spaces);
        let json = serde_json::to_value(&rules).unwrap();
        assert_eq!(json, serde_json::json!({ "maxLength": 5 }));

        let back: FieldValidation = serde_json::from_value(json).unwrap();
        assert_eq!(back.max_length, Some(5));
        assert!(back.custom.is_none());
    }
}
