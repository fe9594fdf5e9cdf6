//! HTTP transport for GraphQL requests.
//!
//! Client-side (hydrate): real POSTs via `gloo-net`.
//! Server-side (SSR) and native tests: requests fail with a network error,
//! since the backend is only reachable from the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::errors::GatewayError;
use super::types::GraphqlRequest;

/// Raw HTTP outcome handed back to the gateway.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Seam between the gateway and the wire.
///
/// Implementations attach `Authorization: Bearer <token>` when `bearer` is
/// `Some` and send no authorization header otherwise.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send one GraphQL request.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Network` when the request cannot be sent or the
    /// response body is not JSON.
    async fn send(&self, request: &GraphqlRequest, bearer: Option<&str>) -> Result<TransportResponse, GatewayError>;
}

/// Authorization header value for an optional token. Blank tokens send nothing.
pub fn authorization_header(bearer: Option<&str>) -> Option<String> {
    bearer
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {t}"))
}

/// `gloo-net` transport bound to a single GraphQL endpoint.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &GraphqlRequest, bearer: Option<&str>) -> Result<TransportResponse, GatewayError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::post(&self.endpoint).header("Accept", "application/json");
            if let Some(value) = authorization_header(bearer) {
                builder = builder.header("Authorization", &value);
            }
            let resp = builder
                .json(request)
                .map_err(|e| GatewayError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| GatewayError::Network(e.to_string()))?;
            let status = resp.status();
            let body = match resp.json::<serde_json::Value>().await {
                Ok(body) => body,
                Err(_) if !resp.ok() => serde_json::Value::Null,
                Err(e) => return Err(GatewayError::Network(e.to_string())),
            };
            Ok(TransportResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, bearer);
            Err(GatewayError::Network("not available on server".to_owned()))
        }
    }
}
