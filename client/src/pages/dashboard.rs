//! Dashboard page listing UserDb records with create, edit and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It requests the record list once
//! the guard admits the session, and re-requests it after every successful
//! mutation. Responses that land after the page is gone only write
//! page-local signals.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppGateway;
use crate::components::confirm_delete_modal::ConfirmDeleteModal;
use crate::components::user_form_modal::UserFormModal;
use crate::components::user_table::UserTable;
use crate::net::errors::GatewayError;
use crate::net::gateway::GatewayClient;
use crate::net::transport::Transport;
use crate::net::types::UserRecord;
use crate::state::auth::AuthState;
use crate::state::storage::Storage;
use crate::state::users::{DashboardDialog, DashboardModal, EditorMode, FormDraft, UsersState};
use crate::util::auth::{GuardDecision, guard, install_unauth_redirect};

/// Dispatch a submitted draft as a create or an update.
///
/// # Errors
///
/// `Validation` when the phone does not parse (nothing is sent), otherwise
/// whatever the mutation returns.
pub(crate) async fn save_draft<T: Transport, S: Storage>(
    gateway: &GatewayClient<T, S>,
    mode: &EditorMode,
    draft: &FormDraft,
) -> Result<UserRecord, GatewayError> {
    let input = draft.to_input()?;
    match mode {
        EditorMode::Create => gateway.create_user(&input).await,
        EditorMode::Edit(id) => gateway.update_user(id, &input).await,
    }
}

fn welcome_text(auth: &AuthState) -> String {
    format!("Welcome, {}", auth.username().unwrap_or_default())
}

/// Dashboard page: the record table plus its create/edit and delete modals.
/// Redirects to `/login` if the session holds no token.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = expect_context::<AppGateway>();
    install_unauth_redirect(auth, use_navigate());

    let users = RwSignal::new(UsersState::default());
    let dialog = RwSignal::new(DashboardDialog::default());
    let draft = RwSignal::new(FormDraft::default());
    let modal_error = RwSignal::new(None::<String>);
    let pending = Signal::derive(move || dialog.with(|d| d.pending));

    let refresh = {
        let gateway = gateway.clone();
        Callback::new(move |()| {
            let gateway = gateway.clone();
            let mut ticket = 0;
            users.update(|s| ticket = s.begin_load());
            leptos::task::spawn_local(async move {
                let result = gateway.list_users().await;
                users.update(|s| {
                    s.finish_load(ticket, result);
                });
            });
        })
    };

    let requested_list = RwSignal::new(false);
    Effect::new(move || {
        if requested_list.get_untracked() {
            return;
        }
        if guard(&auth.get()) != GuardDecision::Allow {
            return;
        }
        requested_list.set(true);
        refresh.run(());
    });

    let open_modal = move |next: DashboardModal| {
        let mut opened = false;
        dialog.update(|d| opened = d.open(next));
        if opened {
            modal_error.set(None);
        }
        opened
    };

    let on_create = move |_: leptos::ev::MouseEvent| {
        if open_modal(DashboardModal::Editor(EditorMode::Create)) {
            draft.set(FormDraft::default());
        }
    };
    let on_edit = Callback::new(move |id: String| {
        let Some(record) = users.with_untracked(|s| s.find(&id).cloned()) else {
            return;
        };
        if open_modal(DashboardModal::Editor(EditorMode::Edit(id))) {
            draft.set(FormDraft::from(&record));
        }
    });
    let on_delete_request = Callback::new(move |id: String| {
        open_modal(DashboardModal::ConfirmDelete(id));
    });
    let on_cancel = Callback::new(move |()| {
        let mut closed = false;
        dialog.update(|d| closed = d.dismiss());
        if closed {
            draft.set(FormDraft::default());
        }
    });

    let on_save = {
        let gateway = gateway.clone();
        Callback::new(move |()| {
            let mut started = None;
            dialog.update(|d| started = d.begin_submit());
            let Some(DashboardModal::Editor(mode)) = started else {
                return;
            };
            modal_error.set(None);
            let gateway = gateway.clone();
            let submitted = draft.get_untracked();
            leptos::task::spawn_local(async move {
                let result = save_draft(&gateway, &mode, &submitted).await;
                dialog.update(|d| d.finish_submit(result.is_ok()));
                match result {
                    Ok(record) => {
                        log::debug!("saved record {}", record.id);
                        draft.set(FormDraft::default());
                        refresh.run(());
                    }
                    Err(e) => modal_error.set(Some(e.to_string())),
                }
            });
        })
    };

    let on_confirm_delete = {
        let gateway = gateway.clone();
        Callback::new(move |()| {
            let mut started = None;
            dialog.update(|d| started = d.begin_submit());
            let Some(DashboardModal::ConfirmDelete(id)) = started else {
                return;
            };
            modal_error.set(None);
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                let result = gateway.delete_user(&id).await;
                dialog.update(|d| d.finish_submit(result.is_ok()));
                match result {
                    Ok(deleted) => {
                        log::debug!("deleted record {deleted}");
                        refresh.run(());
                    }
                    Err(e) => modal_error.set(Some(e.to_string())),
                }
            });
        })
    };

    let on_logout = move |_: leptos::ev::MouseEvent| gateway.session().clear_session();

    view! {
        <Show
            when=move || guard(&auth.get()) == GuardDecision::Allow
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loaded { "Redirecting to login..." } else { "Loading..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">"Dashboard"</span>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">{move || welcome_text(&auth.get())}</span>
                    <button class="btn toolbar__logout" on:click=on_logout.clone() title="Logout">
                        "Logout"
                    </button>
                </header>

                <section class="dashboard-page__body">
                    <div class="dashboard-page__actions">
                        <button class="btn btn--primary" on:click=on_create>
                            "+ Add User"
                        </button>
                    </div>
                    <Show
                        when=move || !users.with(|s| s.loading)
                        fallback=move || view! { <p>"Loading users..."</p> }
                    >
                        {move || {
                            let state = users.get();
                            if let Some(error) = state.error {
                                view! { <p class="dashboard-page__error">{error}</p> }.into_any()
                            } else if state.items.is_empty() {
                                view! { <p class="dashboard-page__empty">"No users yet."</p> }.into_any()
                            } else {
                                view! {
                                    <UserTable records=state.items on_edit=on_edit on_delete=on_delete_request/>
                                }
                                    .into_any()
                            }
                        }}
                    </Show>
                </section>

                {move || match dialog.with(|d| d.modal.clone()) {
                    DashboardModal::Closed => ().into_any(),
                    DashboardModal::Editor(mode) => {
                        view! {
                            <UserFormModal
                                mode=mode
                                draft=draft
                                pending=pending
                                error=modal_error
                                on_submit=on_save
                                on_cancel=on_cancel
                            />
                        }
                            .into_any()
                    }
                    DashboardModal::ConfirmDelete(id) => {
                        let name = users.with_untracked(|s| s.find(&id).map(|r| r.name.clone())).unwrap_or_default();
                        view! {
                            <ConfirmDeleteModal
                                name=name
                                pending=pending
                                error=modal_error
                                on_confirm=on_confirm_delete
                                on_cancel=on_cancel
                            />
                        }
                            .into_any()
                    }
                }}
            </div>
        </Show>
    }
}
