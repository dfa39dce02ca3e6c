use contracts::forms::{FieldOption, FieldType, FieldValidation, FieldValue, FormConfig, FormField};

pub const CONTACT_FORM_ID: &str = "contact";

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// The contact form rendered on `/`
pub fn contact_form_config() -> FormConfig {
    FormConfig::new(
        CONTACT_FORM_ID,
        "Contact us",
        vec![
            FormField::new("name", "Name", FieldType::Input)
                .required()
                .with_placeholder("Your name")
                .with_validation(
                    FieldValidation::default()
                        .min_length(2)
                        .max_length(80)
                        .custom(has_letter),
                ),
            FormField::new("email", "Email", FieldType::Input)
                .required()
                .with_placeholder("you@example.com")
                .with_validation(FieldValidation::default().pattern(EMAIL_PATTERN))
                .with_error_message("Enter a valid email address"),
            FormField::new("topic", "Topic", FieldType::Select)
                .required()
                .with_placeholder("Choose a topic")
                .with_options(vec![
                    FieldOption::new("General question", "general"),
                    FieldOption::new("Support", "support"),
                    FieldOption::new("Sales", "sales"),
                ]),
            FormField::new("message", "Message", FieldType::Textarea)
                .required()
                .with_placeholder("How can we help?")
                .with_validation(FieldValidation::default().min_length(10).max_length(1000)),
            FormField::new("subscribe", "Send me product updates", FieldType::Checkbox),
        ],
    )
    .with_buttons("Send", "Reset")
}

fn has_letter(value: &FieldValue) -> bool {
    value
        .as_text()
        .map_or(false, |t| t.chars().any(char::is_alphabetic))
}
