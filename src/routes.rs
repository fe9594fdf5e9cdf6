//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server has no API of its own. It server-renders the Leptos app for
//! every client route, serves the compiled WASM/JS/CSS bundle under `/pkg`
//! and answers `/healthz`. All record and auth traffic goes from the browser
//! straight to the GraphQL backend.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Plain HTTP routes that do not go through Leptos.
fn service_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Health check, SSR routes and the static bundle in one router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "registered leptos routes");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(service_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(config.site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
