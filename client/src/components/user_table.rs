//! Record table for the dashboard.

#[cfg(test)]
#[path = "user_table_test.rs"]
mod user_table_test;

use leptos::prelude::*;

use crate::net::types::UserRecord;

fn active_label(active: bool) -> &'static str {
    if active { "Yes" } else { "No" }
}

fn status_class(active: bool) -> &'static str {
    if active { "user-table__status user-table__status--active" } else { "user-table__status" }
}

/// Display form for the date column; empty dates render as a dash.
fn date_label(date: &str) -> String {
    if date.trim().is_empty() { "-".to_owned() } else { date.to_owned() }
}

/// One row per record with edit and delete actions keyed by record id.
#[component]
pub fn UserTable(
    records: Vec<UserRecord>,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let rows = records
        .into_iter()
        .map(|record| {
            let edit_id = record.id.clone();
            let delete_id = record.id.clone();
            view! {
                <tr class="user-table__row">
                    <td>{record.name}</td>
                    <td>{date_label(&record.date_of_birth)}</td>
                    <td>{record.email}</td>
                    <td>{record.phone}</td>
                    <td>
                        <span class=status_class(record.active)>{active_label(record.active)}</span>
                    </td>
                    <td class="user-table__actions">
                        <button class="btn" on:click=move |_| on_edit.run(edit_id.clone())>
                            "Edit"
                        </button>
                        <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                            "Delete"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="user-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Date of Birth"</th>
                    <th>"Email"</th>
                    <th>"Phone"</th>
                    <th>"Active"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
