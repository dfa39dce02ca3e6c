use contracts::forms::{FormData, SubmittedForm};
use leptos::prelude::*;

use crate::shared::date_utils::format_timestamp;
use crate::shared::state::use_form_store;

/// Table of submitted forms, newest first.
///
/// Reads the history from the `FormStore` in context; `form_id` restricts it
/// to one form.
#[component]
pub fn SubmissionHistory(
    #[prop(optional, into)]
    form_id: Option<String>,
    /// Maximum number of rows
    limit: usize,
) -> impl IntoView {
    let store = use_form_store();
    let form_id = StoredValue::new(form_id);

    let total = Signal::derive(move || {
        store.with_state(|state| {
            form_id.with_value(|id| submission_total(state.submitted_forms(), id.as_deref()))
        })
    });
    let rows = Signal::derive(move || {
        store.with_state(|state| {
            form_id.with_value(|id| {
                recent_submissions(state.submitted_forms(), id.as_deref(), limit)
            })
        })
    });

    view! {
        <section class="submission-history">
            <h3 class="submission-history__title">
                "Submissions " <span class="submission-history__count">{move || total.get()}</span>
            </h3>
            <Show
                when=move || { total.get() > 0 }
                fallback=|| view! { <div class="submission-history__empty">"Nothing submitted yet"</div> }
            >
                <table class="table__data">
                    <thead>
                        <tr>
                            <th>"Form"</th>
                            <th>"Submitted at"</th>
                            <th>"Values"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|(position, _)| *position
                            children=move |(_, entry): (usize, SubmittedForm)| {
                                let json = serde_json::to_string_pretty(&entry.data).unwrap_or_default();
                                view! {
                                    <tr>
                                        <td>{entry.id.clone()}</td>
                                        <td>{format_timestamp(entry.timestamp)}</td>
                                        <td>
                                            <details>
                                                <summary>{summarize(&entry.data)}</summary>
                                                <pre class="submission-history__json">{json}</pre>
                                            </details>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

/// Number of submissions, optionally only of `form_id`
fn submission_total(history: &[SubmittedForm], form_id: Option<&str>) -> usize {
    match form_id {
        Some(id) => history.iter().filter(|s| s.id == id).count(),
        None => history.len(),
    }
}

/// Last `limit` submissions, newest first, optionally only of `form_id`.
/// Each entry carries its position in the history, which never changes.
fn recent_submissions(
    history: &[SubmittedForm],
    form_id: Option<&str>,
    limit: usize,
) -> Vec<(usize, SubmittedForm)> {
    history
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, s)| form_id.map_or(true, |id| s.id == id))
        .take(limit)
        .map(|(position, s)| (position, s.clone()))
        .collect()
}

/// "name: value" pairs of non-blank fields
fn summarize(data: &FormData) -> String {
    data.iter()
        .filter(|(_, value)| !value.is_blank())
        .map(|(name, value)| format!("{}: {}", name, value.display()))
        .collect::<Vec<_>>()
        .join("; ")
}
