use contracts::forms::{FormData, SubmittedForm};
use leptos::prelude::*;

use super::forms_state::FormsState;

/// FormStore is the app-wide handle to form values and submission history.
///
/// Created once in `App` and handed down through context. Each operation is a
/// single signal update, so readers never see half of a save.
#[derive(Clone, Copy)]
pub struct FormStore {
    state: RwSignal<FormsState>,
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FormsState::new()),
        }
    }

    /// Replace the current values of `form_id` and append a history record
    pub fn save_form_data(&self, form_id: &str, data: &FormData) {
        log::debug!("save_form_data: form='{}', fields={}", form_id, data.len());
        self.state.update(|state| {
            state.save_form_data(form_id, data);
            log::debug!("submissions total: {}", state.submitted_forms().len());
        });
    }

    /// Drop the current values of `form_id`; history stays as is
    pub fn clear_form_data(&self, form_id: &str) {
        log::debug!("clear_form_data: form='{}'", form_id);
        self.state.update(|state| {
            if state.clear_form_data(form_id).is_none() {
                log::debug!("nothing stored for '{}'", form_id);
            }
        });
    }

    /// Current values of a form (tracked)
    pub fn form_data(&self, form_id: &str) -> Option<FormData> {
        self.state.with(|state| state.form_data(form_id).cloned())
    }

    /// Current values of a form without subscribing to changes
    pub fn form_data_untracked(&self, form_id: &str) -> Option<FormData> {
        self.state
            .with_untracked(|state| state.form_data(form_id).cloned())
    }

    /// Submission history in insertion order (tracked)
    pub fn submitted_forms(&self) -> Vec<SubmittedForm> {
        self.state.with(|state| state.submitted_forms().to_vec())
    }

    pub fn submission_count(&self) -> usize {
        self.state.with(|state| state.submitted_forms().len())
    }

    /// Run `f` against the whole state (tracked)
    pub fn with_state<R>(&self, f: impl FnOnce(&FormsState) -> R) -> R {
        self.state.with(f)
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the form store provided by `App`
pub fn use_form_store() -> FormStore {
    use_context::<FormStore>().expect("FormStore not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> FormData {
        [("name", name)].into_iter().collect()
    }

    #[test]
    fn test_save_and_clear_through_store() {
        let owner = Owner::new();
        owner.with(|| {
            let store = FormStore::new();
            store.save_form_data("contact", &contact("Alice"));
            store.save_form_data("contact", &contact("Bob"));

            assert_eq!(store.form_data_untracked("contact"), Some(contact("Bob")));
            assert_eq!(store.submission_count(), 2);

            store.clear_form_data("contact");
            store.clear_form_data("contact");

            assert!(store.form_data("contact").is_none());
            let history = store.submitted_forms();
            assert_eq!(history.len(), 2);
            assert_eq!(history[0].data, contact("Alice"));
            assert_eq!(history[1].data, contact("Bob"));
        });
    }

    #[test]
    fn test_copies_share_state() {
        let owner = Owner::new();
        owner.with(|| {
            let store = FormStore::new();
            let other = store;
            other.save_form_data("contact", &contact("Alice"));

            assert_eq!(
                store.with_state(|state| state.forms_data().len()),
                1
            );
        });
    }

    #[test]
    fn test_use_form_store_reads_context() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(FormStore::new());
            let store = use_form_store();
            store.save_form_data("contact", &contact("Alice"));
            assert_eq!(use_form_store().submission_count(), 1);
        });
    }
}
