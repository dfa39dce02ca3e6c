use std::collections::HashMap;

use contracts::forms::{FormData, SubmittedForm};

/// FormsState holds the current values of every form and the submission history.
///
/// Values are cloned on the way in, so nothing stored here aliases the
/// caller's data. History entries are only ever appended.
#[derive(Clone, Debug, PartialEq)]
pub struct FormsState<D = FormData> {
    forms_data: HashMap<String, D>,
    submitted_forms: Vec<SubmittedForm<D>>,
}

impl<D: Clone> FormsState<D> {
    pub fn new() -> Self {
        Self {
            forms_data: HashMap::new(),
            submitted_forms: Vec::new(),
        }
    }

    /// Store `data` as the current values of `form_id` and record a submission
    /// stamped with the host clock
    pub fn save_form_data(&mut self, form_id: &str, data: &D) {
        self.save_form_data_at(form_id, data, now_millis());
    }

    /// Same as `save_form_data` with an explicit timestamp (ms since epoch)
    pub fn save_form_data_at(&mut self, form_id: &str, data: &D, timestamp: i64) {
        self.set_form_data(form_id, data);
        self.add_submitted_form(form_id, data, timestamp);
    }

    /// Forget the current values of `form_id`; history is left untouched
    pub fn clear_form_data(&mut self, form_id: &str) -> Option<D> {
        self.forms_data.remove(form_id)
    }

    fn set_form_data(&mut self, form_id: &str, data: &D) {
        self.forms_data.insert(form_id.to_string(), data.clone());
    }

    fn add_submitted_form(&mut self, form_id: &str, data: &D, timestamp: i64) {
        self.submitted_forms.push(SubmittedForm {
            id: form_id.to_string(),
            data: data.clone(),
            timestamp,
        });
    }

    pub fn form_data(&self, form_id: &str) -> Option<&D> {
        self.forms_data.get(form_id)
    }

    pub fn forms_data(&self) -> &HashMap<String, D> {
        &self.forms_data
    }

    /// Submission history in insertion order
    pub fn submitted_forms(&self) -> &[SubmittedForm<D>] {
        &self.submitted_forms
    }

    pub fn last_submission(&self) -> Option<&SubmittedForm<D>> {
        self.submitted_forms.last()
    }

    pub fn submissions_for<'a>(
        &'a self,
        form_id: &'a str,
    ) -> impl Iterator<Item = &'a SubmittedForm<D>> + 'a {
        self.submitted_forms.iter().filter(move |s| s.id == form_id)
    }
}

impl<D: Clone> Default for FormsState<D> {
    fn default() -> Self {
        Self::new()
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::forms::FieldValue;

    fn contact(name: &str, email: &str) -> FormData {
        [("name", name), ("email", email)].into_iter().collect()
    }

    #[test]
    fn test_save_stores_copy() {
        let mut state = FormsState::new();
        let mut data = contact("Alice", "a@x.com");

        state.save_form_data("contact", &data);
        data.insert("name", "Mallory");

        assert_eq!(state.form_data("contact"), Some(&contact("Alice", "a@x.com")));
        assert_eq!(
            state.last_submission().map(|s| &s.data),
            Some(&contact("Alice", "a@x.com"))
        );
    }

    #[test]
    fn test_history_not_affected_by_later_saves() {
        let mut state = FormsState::new();
        state.save_form_data_at("contact", &contact("Alice", "a@x.com"), 1);
        state.save_form_data_at("contact", &contact("Bob", "b@x.com"), 2);

        assert_eq!(state.submitted_forms()[0].data, contact("Alice", "a@x.com"));
        assert_eq!(state.form_data("contact"), Some(&contact("Bob", "b@x.com")));
    }

    #[test]
    fn test_contact_scenario() {
        let mut state = FormsState::new();
        state.save_form_data_at("contact", &contact("Alice", "a@x.com"), 1_700_000_000_000);

        assert_eq!(state.forms_data().len(), 1);
        assert_eq!(
            state.submitted_forms(),
            &[SubmittedForm {
                id: "contact".to_string(),
                data: contact("Alice", "a@x.com"),
                timestamp: 1_700_000_000_000,
            }]
        );
    }

    #[test]
    fn test_two_saves_then_clear() {
        let mut state = FormsState::new();
        state.save_form_data("contact", &contact("Alice", "a@x.com"));
        state.save_form_data("contact", &contact("Bob", "b@x.com"));

        assert_eq!(state.submitted_forms().len(), 2);
        assert_eq!(state.form_data("contact"), Some(&contact("Bob", "b@x.com")));

        let removed = state.clear_form_data("contact");
        assert_eq!(removed, Some(contact("Bob", "b@x.com")));
        assert!(state.form_data("contact").is_none());
        assert_eq!(state.submitted_forms().len(), 2);
    }

    #[test]
    fn test_clear_absent_is_noop() {
        let mut state = FormsState::new();
        state.save_form_data_at("contact", &contact("Alice", "a@x.com"), 5);
        let before = state.clone();

        assert!(state.clear_form_data("newsletter").is_none());
        assert_eq!(state, before);

        let mut empty: FormsState = FormsState::new();
        assert!(empty.clear_form_data("contact").is_none());
        assert!(empty.forms_data().is_empty());
        assert!(empty.submitted_forms().is_empty());
    }

    #[test]
    fn test_last_submission_matches_each_save() {
        let mut state = FormsState::new();
        let forms = ["contact", "newsletter", "contact", "feedback"];
        let mut previous = i64::MIN;

        for (i, form_id) in forms.iter().enumerate() {
            let mut data = FormData::new();
            data.insert("n", FieldValue::Number(i as f64));
            state.save_form_data(form_id, &data);

            assert_eq!(state.submitted_forms().len(), i + 1);
            let last = state.last_submission().unwrap();
            assert_eq!(last.id, *form_id);
            assert_eq!(last.data, data);
            assert!(last.timestamp >= previous);
            previous = last.timestamp;
        }

        assert_eq!(state.submissions_for("contact").count(), 2);
        assert_eq!(state.forms_data().len(), 3);
    }

    #[test]
    fn test_empty_form_id_is_accepted() {
        let mut state = FormsState::new();
        state.save_form_data_at("", &FormData::new(), 0);
        assert!(state.form_data("").is_some());
        assert_eq!(state.submitted_forms()[0].id, "");
    }

    #[test]
    fn test_generic_payload() {
        #[derive(Clone, Debug, PartialEq)]
        struct Newsletter {
            email: String,
        }

        let mut state: FormsState<Newsletter> = FormsState::new();
        let mut data = Newsletter {
            email: "a@x.com".into(),
        };
        state.save_form_data_at("newsletter", &data, 10);
        data.email.clear();

        assert_eq!(state.form_data("newsletter").unwrap().email, "a@x.com");
        assert_eq!(state.submitted_forms()[0].data.email, "a@x.com");
    }
}
