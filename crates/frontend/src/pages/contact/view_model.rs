use contracts::forms::{FieldErrors, FormConfig, FormData};
use leptos::prelude::*;

use crate::shared::components::dynamic_form::ErrorTexts;
use crate::shared::state::FormStore;

/// ViewModel for the contact page
#[derive(Clone, Copy)]
pub struct ContactViewModel {
    pub config: StoredValue<FormConfig>,
    pub draft: RwSignal<FormData>,
    pub errors: RwSignal<ErrorTexts>,
    pub notice: RwSignal<Option<String>>,
    store: FormStore,
}

impl ContactViewModel {
    /// Draft starts from the stored values of the form, or empty
    pub fn new(store: FormStore, config: FormConfig) -> Self {
        let draft = store
            .form_data_untracked(&config.id)
            .unwrap_or_else(|| config.empty_data());

        Self {
            config: StoredValue::new(config),
            draft: RwSignal::new(draft),
            errors: RwSignal::new(ErrorTexts::new()),
            notice: RwSignal::new(None),
            store,
        }
    }

    fn form_id(&self) -> String {
        self.config.with_value(|c| c.id.clone())
    }

    /// Check the draft and save it when every field passes
    pub fn submit_command(&self) {
        let draft = self.draft.get_untracked();
        let checked = self.config.with_value(|config| {
            config
                .check(&draft)
                .map_err(|errors| error_texts(config, &errors))
        });

        match checked {
            Ok(()) => {
                self.store.save_form_data(&self.form_id(), &draft);
                self.errors.set(ErrorTexts::new());
                self.notice.set(Some("Thank you, your message was sent".to_string()));
            }
            Err(texts) => {
                log::warn!("contact form rejected: {} field(s) invalid", texts.len());
                self.errors.set(texts);
                self.notice.set(None);
            }
        }
    }

    /// Drop the stored values and start over; history is kept
    pub fn cancel_command(&self) {
        self.store.clear_form_data(&self.form_id());
        self.draft
            .set(self.config.with_value(FormConfig::empty_data));
        self.errors.set(ErrorTexts::new());
        self.notice.set(None);
    }
}

fn error_texts(config: &FormConfig, errors: &FieldErrors) -> ErrorTexts {
    errors
        .iter()
        .map(|(name, error)| {
            let text = match config.field(name) {
                Some(field) => field.error_text(error),
                None => error.to_string(),
            };
            (name.clone(), text)
        })
        .collect()
}
