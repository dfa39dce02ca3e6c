use crate::config::AppConfig;
use crate::routes::routes::AppRoutes;
use crate::shared::state::FormStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One store for the whole app; pages get it with `use_form_store`.
    provide_context(FormStore::new());
    provide_context(AppConfig::default());

    view! {
        <AppRoutes />
    }
}
