//! Build-time client configuration.
//!
//! The WASM bundle has no process environment, so the GraphQL endpoint is
//! baked in at compile time from `USERDB_GRAPHQL_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Endpoint used when `USERDB_GRAPHQL_URL` is unset at build time.
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://localhost:1337/graphql";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    pub endpoint: String,
}

impl GatewayConfig {
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("USERDB_GRAPHQL_URL"))
    }

    fn from_value(value: Option<&str>) -> Self {
        let endpoint = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_GRAPHQL_ENDPOINT)
            .to_owned();
        Self { endpoint }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
