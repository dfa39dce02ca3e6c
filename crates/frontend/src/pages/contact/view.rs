use leptos::prelude::*;

use super::model::{contact_form_config, CONTACT_FORM_ID};
use super::view_model::ContactViewModel;
use crate::config::AppConfig;
use crate::shared::components::dynamic_form::DynamicForm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::submission_history::SubmissionHistory;
use crate::shared::state::use_form_store;

#[component]
pub fn ContactPage() -> impl IntoView {
    let app_config = use_context::<AppConfig>().unwrap_or_default();
    let vm = ContactViewModel::new(use_form_store(), contact_form_config());

    view! {
        <div class="page contact-page">
            <PageHeader title=app_config.title subtitle="Fill in the form and we will get back to you" />

            {move || vm.notice.get().map(|text| view! {
                <div class="notice notice--success">{text}</div>
            })}

            <DynamicForm
                config=vm.config.get_value()
                data=vm.draft
                errors=vm.errors
                on_submit=Callback::new(move |_| vm.submit_command())
                on_cancel=Callback::new(move |_| vm.cancel_command())
            />

            <SubmissionHistory form_id=CONTACT_FORM_ID limit=app_config.history_limit />
        </div>
    }
}
