use leptos::prelude::*;

use super::FieldError;

/// Multi-line text input
#[component]
pub fn Textarea(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    name: MaybeProp<String>,
    #[prop(optional)]
    disabled: bool,
    #[prop(optional)]
    readonly: bool,
    #[prop(optional)]
    required: bool,
    /// Visible rows, 4 when not set
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_class = move || {
        if error.get().is_some() {
            "form__textarea form__textarea--invalid"
        } else {
            "form__textarea"
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                    {required.then_some(view! { <span class="form__required">"*"</span> })}
                </label>
            })}
            <textarea
                id=textarea_id
                name=move || name.get().unwrap_or_default()
                class=textarea_class
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=disabled
                readonly=readonly
                required=required
                rows=rows.unwrap_or(4)
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            <FieldError error=error />
        </div>
    }
}
