use contracts::forms::FieldOption;
use leptos::prelude::*;

use super::FieldError;

/// Select with label, optional placeholder entry and error line
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Currently selected option value
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(into)]
    options: Signal<Vec<FieldOption>>,
    /// Shown as a disabled first entry while nothing is selected
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    name: MaybeProp<String>,
    #[prop(optional)]
    disabled: bool,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let select_class = move || {
        if error.get().is_some() {
            "form__select form__select--invalid"
        } else {
            "form__select"
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                    {required.then_some(view! { <span class="form__required">"*"</span> })}
                </label>
            })}
            <select
                id=select_id
                name=move || name.get().unwrap_or_default()
                class=select_class
                disabled=disabled
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|p| view! {
                    <option value="" disabled=true selected=move || { value.get().is_empty() }>
                        {p}
                    </option>
                })}
                <For
                    each=move || options.get()
                    key=|opt| opt.value.clone()
                    children=move |opt: FieldOption| {
                        let option_value = opt.value.clone();
                        let is_selected = move || value.get() == option_value;
                        view! {
                            <option value=opt.value selected=is_selected>
                                {opt.label}
                            </option>
                        }
                    }
                />
            </select>
            <FieldError error=error />
        </div>
    }
}
