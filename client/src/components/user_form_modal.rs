//! Create/edit modal bound to a `FormDraft`.

use leptos::prelude::*;

use crate::state::users::{EditorMode, FormDraft};

/// Modal form for one record. Required fields rely on native browser checks;
/// phone parsing happens on submit in the dashboard.
#[component]
pub fn UserFormModal(
    mode: EditorMode,
    draft: RwSignal<FormDraft>,
    #[prop(into)] pending: Signal<bool>,
    error: RwSignal<Option<String>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };
    let submit_label = mode.submit_label();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown>
                <h2>{mode.title()}</h2>
                <form class="dialog__form" on:submit=on_form_submit>
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            type="text"
                            required=true
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Date of Birth"
                        <input
                            class="dialog__input"
                            type="date"
                            required=true
                            prop:value=move || draft.with(|d| d.date_of_birth.clone())
                            on:input=move |ev| draft.update(|d| d.date_of_birth = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            required=true
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Phone"
                        <input
                            class="dialog__input"
                            type="tel"
                            inputmode="numeric"
                            required=true
                            prop:value=move || draft.with(|d| d.phone.clone())
                            on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label dialog__label--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.with(|d| d.active)
                            on:change=move |ev| draft.update(|d| d.active = event_target_checked(&ev))
                        />
                        "Active"
                    </label>
                    <Show when=move || error.with(Option::is_some)>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button
                            class="btn"
                            type="button"
                            disabled=move || pending.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                            {move || if pending.get() { "Saving..." } else { submit_label }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
