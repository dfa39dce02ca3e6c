//! Type declarations for dynamically rendered forms
//!
//! - `FormField` / `FormConfig` describe what a form looks like
//! - `FormData` holds what the user entered
//! - `SubmittedForm` is one entry of the submission history
//!
//! ```rust,ignore
//! use contracts::forms::{FieldType, FormConfig, FormField};
//!
//! let config = FormConfig::new(
//!     "contact",
//!     "Contact us",
//!     vec![FormField::new("name", "Name", FieldType::Input).required()],
//! );
//! let draft = config.empty_data();
//! ```

mod config;
mod data;
mod field;
mod validation;

pub use config::{FormConfig, DEFAULT_CANCEL_TEXT, DEFAULT_SUBMIT_TEXT};
pub use data::{FieldValue, FormData, SubmittedForm};
pub use field::{FieldOption, FieldType, FormField};
pub use validation::{CustomRule, FieldErrors, FieldValidation, ValidationError};
