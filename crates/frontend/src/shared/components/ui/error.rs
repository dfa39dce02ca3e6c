use leptos::prelude::*;

/// Error line rendered under a field, nothing when there is no error
#[component]
pub fn FieldError(#[prop(into)] error: MaybeProp<String>) -> impl IntoView {
    move || {
        error.get().map(|text| {
            view! { <div class="form__error" role="alert">{text}</div> }
        })
    }
}
