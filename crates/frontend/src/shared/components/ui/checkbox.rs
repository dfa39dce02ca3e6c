use leptos::prelude::*;

use super::FieldError;

/// Checkbox with the label to its right
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    #[prop(optional, into)]
    name: MaybeProp<String>,
    #[prop(optional)]
    disabled: bool,
    /// Read-only checkboxes ignore clicks; HTML has no readonly for them
    #[prop(optional)]
    readonly: bool,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let wrapper_class = if disabled || readonly {
        "form__checkbox-wrapper form__checkbox-wrapper--disabled"
    } else {
        "form__checkbox-wrapper"
    };

    view! {
        <div class="form__group">
            <div class=wrapper_class>
                <input
                    id=checkbox_id
                    name=move || name.get().unwrap_or_default()
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=move || checked.get()
                    disabled=disabled
                    required=required
                    aria-readonly=readonly.then_some("true")
                    on:click=move |ev| {
                        if readonly {
                            ev.prevent_default();
                        }
                    }
                    on:change=move |ev| {
                        if let Some(handler) = on_change {
                            handler.run(event_target_checked(&ev));
                        }
                    }
                />
                <label class="form__checkbox-label" for=checkbox_id>
                    {label}
                </label>
            </div>
            <FieldError error=error />
        </div>
    }
}
