//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::GatewayConfig;
use crate::net::gateway::GatewayClient;
use crate::net::transport::HttpTransport;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::auth::AuthState;
use crate::state::session::{Session, SessionStore};
use crate::state::storage::BrowserStorage;

/// Session store backed by `localStorage`.
pub type AppSession = SessionStore<BrowserStorage>;
/// Gateway used by every page.
pub type AppGateway = GatewayClient<HttpTransport, BrowserStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store and gateway, bridges session notifications into the
/// reactive `AuthState`, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AppSession::new(BrowserStorage);
    let config = GatewayConfig::from_build_env();
    let gateway = AppGateway::new(HttpTransport::new(config.endpoint), session.clone());
    let auth = RwSignal::new(AuthState::default());

    let subscription = session.subscribe(move |next: &Session| auth.set(AuthState::loaded(next.clone())));
    let session_cleanup = session.clone();
    on_cleanup(move || {
        session_cleanup.unsubscribe(subscription);
    });

    // Effects only run in the browser, after hydration.
    let session_initial = session.clone();
    Effect::new(move || auth.set(AuthState::loaded(session_initial.session())));

    provide_context(auth);
    provide_context(gateway);

    view! {
        <Stylesheet id="leptos" href="/pkg/userdb-console.css"/>
        <Title text="UserDb"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
