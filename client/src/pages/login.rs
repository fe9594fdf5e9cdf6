//! Login page: identifier + password against the GraphQL `login` mutation.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppGateway;
use crate::state::auth::SubmitState;

/// Trim the identifier and require both fields.
fn validate_login_input(identifier: &str, password: &str) -> Result<(String, String), &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() || password.is_empty() {
        return Err("Enter your email or username and password.");
    }
    Ok((identifier.to_owned(), password.to_owned()))
}

fn submit_label(state: &SubmitState) -> &'static str {
    if state.is_submitting() { "Logging in..." } else { "Login" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    let navigate = use_navigate();

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submit = RwSignal::new(SubmitState::default());

    // Session is written before this fires, so the guard admits `/`.
    Effect::new(move || {
        if submit.with(|s| *s == SubmitState::Succeeded) {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (identifier_value, password_value) =
            match validate_login_input(&identifier.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    submit.update(|s| s.fail(message));
                    return;
                }
            };
        let mut started = false;
        submit.update(|s| started = s.begin());
        if !started {
            return;
        }

        let gateway = gateway.clone();
        leptos::task::spawn_local(async move {
            match gateway.login(&identifier_value, &password_value).await {
                Ok(payload) => {
                    gateway.session().set_session(&payload.jwt, &payload.user);
                    submit.update(SubmitState::succeed);
                }
                Err(e) => {
                    log::warn!("login failed: {e:?}");
                    submit.update(|s| s.fail(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <Show when=move || submit.with(|s| s.error().is_some())>
                    <p class="auth-error">{move || submit.with(|s| s.error().unwrap_or_default().to_owned())}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Email or Username"
                        <input
                            class="auth-input"
                            type="text"
                            required=true
                            prop:value=move || identifier.get()
                            on:input=move |ev| identifier.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="auth-button"
                        type="submit"
                        disabled=move || submit.with(SubmitState::is_submitting)
                    >
                        {move || submit.with(submit_label)}
                    </button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
