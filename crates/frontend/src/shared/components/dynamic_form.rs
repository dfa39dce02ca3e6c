//! Renders a `FormConfig` as a form bound to a `FormData` signal.
//!
//! Field values are read from and written to `data` by field name. The form
//! itself does not check anything: `on_submit` decides what to do with the
//! draft, and `errors` (field name -> message) is shown next to each field.

use std::collections::BTreeMap;

use contracts::forms::{FieldType, FieldValue, FormConfig, FormData, FormField};
use leptos::prelude::*;

use super::ui::{Button, Checkbox, Input, Select, Textarea};

/// Error texts keyed by field name
pub type ErrorTexts = BTreeMap<String, String>;

#[component]
pub fn DynamicForm(
    config: FormConfig,
    data: RwSignal<FormData>,
    #[prop(into)]
    errors: Signal<ErrorTexts>,
    on_submit: Callback<()>,
    #[prop(optional)]
    on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let submit_text = config.submit_label().to_string();
    let cancel_text = config.cancel_label().to_string();
    let form_id = config.id.clone();

    let fields = config
        .fields
        .into_iter()
        .map(|field| view! { <FormFieldView field=field data=data errors=errors /> })
        .collect_view();

    view! {
        <form
            id=form_id
            class="dynamic-form"
            novalidate=true
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <h2 class="dynamic-form__title">{config.title}</h2>
            <div class="dynamic-form__fields">{fields}</div>
            <div class="dynamic-form__actions">
                <Button button_type="submit">{submit_text}</Button>
                {on_cancel.map(|cancel| view! {
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| cancel.run(()))
                    >
                        {cancel_text.clone()}
                    </Button>
                })}
            </div>
        </form>
    }
}

/// One field of a `DynamicForm`, picked by `FieldType`
#[component]
pub fn FormFieldView(
    field: FormField,
    data: RwSignal<FormData>,
    #[prop(into)]
    errors: Signal<ErrorTexts>,
) -> impl IntoView {
    let name = field.name.clone();
    let error = {
        let name = name.clone();
        Signal::derive(move || errors.with(|e| e.get(&name).cloned()))
    };
    let text_value = {
        let name = name.clone();
        Signal::derive(move || data.with(|d| d.text(&name)))
    };
    let set_text = {
        let name = name.clone();
        Callback::new(move |value: String| {
            data.update(|d| {
                d.insert(name.clone(), FieldValue::Text(value));
            });
        })
    };

    let label = field.label.clone();
    let placeholder = field.placeholder.clone();

    match field.field_type {
        FieldType::Input => view! {
            <Input
                id=field.id.clone()
                name=name
                label=label
                value=text_value
                on_input=set_text
                placeholder=placeholder
                input_type=input_type_for(&field)
                required=field.required
                disabled=field.disabled
                readonly=field.readonly
                error=error
            />
        }
        .into_any(),
        FieldType::Textarea => view! {
            <Textarea
                id=field.id.clone()
                name=name
                label=label
                value=text_value
                on_input=set_text
                placeholder=placeholder
                required=field.required
                disabled=field.disabled
                readonly=field.readonly
                error=error
            />
        }
        .into_any(),
        FieldType::Select => {
            // no readonly state for a select
            let select_disabled = field.disabled || field.readonly;
            view! {
                <Select
                    id=field.id.clone()
                    name=name
                    label=label
                    value=text_value
                    on_change=set_text
                    options=field.options().to_vec()
                    placeholder=placeholder
                    required=field.required
                    disabled=select_disabled
                    error=error
                />
            }
            .into_any()
        }
        FieldType::Checkbox => {
            let checked = {
                let name = name.clone();
                Signal::derive(move || data.with(|d| d.flag(&name)))
            };
            let set_checked = {
                let name = name.clone();
                Callback::new(move |value: bool| {
                    data.update(|d| {
                        d.insert(name.clone(), FieldValue::Bool(value));
                    });
                })
            };
            view! {
                <Checkbox
                    id=field.id.clone()
                    name=name
                    label=label
                    checked=checked
                    on_change=set_checked
                    required=field.required
                    disabled=field.disabled
                    readonly=field.readonly
                    error=error
                />
            }
            .into_any()
        }
    }
}

/// HTML input type for a text field; fields named like an email get "email"
fn input_type_for(field: &FormField) -> &'static str {
    if field.name.contains("email") {
        "email"
    } else {
        "text"
    }
}
