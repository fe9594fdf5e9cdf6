//! Signup page: creates an account and signs in with the issued token.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppGateway;
use crate::state::auth::SubmitState;

#[derive(Debug, PartialEq, Eq)]
struct SignupInput {
    username: String,
    email: String,
    password: String,
}

fn validate_signup_input(username: &str, email: &str, password: &str) -> Result<SignupInput, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in username, email and password.");
    }
    Ok(SignupInput {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

fn submit_label(state: &SubmitState) -> &'static str {
    if state.is_submitting() { "Creating Account..." } else { "Sign Up" }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let gateway = expect_context::<AppGateway>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submit = RwSignal::new(SubmitState::default());

    Effect::new(move || {
        if submit.with(|s| *s == SubmitState::Succeeded) {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = match validate_signup_input(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(input) => input,
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
            match gateway.register(&input.username, &input.email, &input.password).await {
                Ok(payload) => {
                    gateway.session().set_session(&payload.jwt, &payload.user);
                    submit.update(SubmitState::succeed);
                }
                Err(e) => {
                    log::warn!("signup failed: {e:?}");
                    submit.update(|s| s.fail(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign Up"</h1>
                <Show when=move || submit.with(|s| s.error().is_some())>
                    <p class="auth-error">{move || submit.with(|s| s.error().unwrap_or_default().to_owned())}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Username"
                        <input
                            class="auth-input"
                            type="text"
                            required=true
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
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
                        class="auth-button auth-button--signup"
                        type="submit"
                        disabled=move || submit.with(SubmitState::is_submitting)
                    >
                        {move || submit.with(submit_label)}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
