//! Confirmation step before a record is deleted.

use leptos::prelude::*;

#[component]
pub fn ConfirmDeleteModal(
    name: String,
    #[prop(into)] pending: Signal<bool>,
    error: RwSignal<Option<String>>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let subject = if name.trim().is_empty() { "this user".to_owned() } else { format!("\"{name}\"") };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete User"</h2>
                <p class="dialog__danger">
                    "This will permanently delete " {subject} "."
                </p>
                <Show when=move || error.with(Option::is_some)>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" disabled=move || pending.get() on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || pending.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if pending.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
