//! Gateway error taxonomy and backend error normalization.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend reports failures either as a batched GraphQL `errors` list or as
//! a single error object. Both shapes are valid inputs; each is reduced to one
//! classified, human-readable `GatewayError` that screens can display as-is.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use serde_json::Value;

/// Fallback message when the backend supplies none.
pub const GENERIC_FAILURE: &str = "Request failed.";

/// Classified failure of a gateway operation. `Display` is the message only.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Transport failure or a non-success status with no error body.
    #[error("{0}")]
    Network(String),
    /// Bad credentials or a missing/expired token.
    #[error("{0}")]
    Auth(String),
    /// Rejected field values.
    #[error("{0}")]
    Validation(String),
    /// Stale id on update/delete.
    #[error("{0}")]
    NotFound(String),
    /// Anything else, including a response without `data`.
    #[error("{0}")]
    Unexpected(String),
}

impl GatewayError {
    /// The human-readable message carried by every variant.
    pub fn message(&self) -> &str {
        match self {
            Self::Network(m) | Self::Auth(m) | Self::Validation(m) | Self::NotFound(m) | Self::Unexpected(m) => m,
        }
    }

    /// Replace an empty message with the caller's fallback, keeping the kind.
    #[must_use]
    pub fn or_fallback(self, fallback: &str) -> Self {
        if !self.message().is_empty() {
            return self;
        }
        let fallback = fallback.to_owned();
        match self {
            Self::Network(_) => Self::Network(fallback),
            Self::Auth(_) => Self::Auth(fallback),
            Self::Validation(_) => Self::Validation(fallback),
            Self::NotFound(_) => Self::NotFound(fallback),
            Self::Unexpected(_) => Self::Unexpected(fallback),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ErrorKind {
    Auth,
    Validation,
    NotFound,
    Other,
}

/// Pick the first structured error out of either payload shape.
///
/// Batched: `{ "errors": [ {...}, ... ] }`. Single: `{ "error": {...} }` or a
/// bare `{ "message": ..., "extensions": ... }` object.
fn first_error(body: &Value) -> Option<&Value> {
    if let Some(first) = body.get("errors").and_then(Value::as_array).and_then(|e| e.first()) {
        return Some(first);
    }
    if let Some(error) = body.get("error").filter(|e| e.is_object()) {
        return Some(error);
    }
    if body.get("message").is_some() || body.get("extensions").is_some() {
        return Some(body);
    }
    None
}

/// Whether a response body carries any error in either shape.
///
/// An `error` object counts whatever `data` holds. A bare error object only
/// counts when `data` is absent or null.
pub fn has_errors(body: &Value) -> bool {
    match body.get("errors") {
        Some(Value::Array(errors)) if !errors.is_empty() => return true,
        Some(Value::Array(_) | Value::Null) | None => {}
        Some(_) => return true,
    }
    if body.get("error").is_some_and(Value::is_object) {
        return true;
    }
    body.get("data").is_none_or(Value::is_null) && first_error(body).is_some()
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).map(str::trim).filter(|s| !s.is_empty())
}

/// Nested domain message first, then the top-level one.
fn error_message(error: &Value) -> Option<String> {
    non_empty_str(error.pointer("/extensions/error/message"))
        .or_else(|| non_empty_str(error.get("message")))
        .map(str::to_owned)
}

fn error_kind(error: &Value, status: Option<u16>) -> ErrorKind {
    let name = non_empty_str(error.pointer("/extensions/error/name")).or_else(|| non_empty_str(error.get("name")));
    let code = non_empty_str(error.pointer("/extensions/code"));
    let nested_status = error
        .pointer("/extensions/error/status")
        .or_else(|| error.get("status"))
        .and_then(Value::as_u64)
        .and_then(|s| u16::try_from(s).ok());

    match (name, code) {
        (Some("UnauthorizedError" | "ForbiddenError"), _) | (_, Some("UNAUTHENTICATED" | "FORBIDDEN")) => {
            return ErrorKind::Auth;
        }
        (Some("ValidationError"), _) | (_, Some("BAD_USER_INPUT")) => return ErrorKind::Validation,
        (Some("NotFoundError"), _) | (_, Some("NOT_FOUND")) => return ErrorKind::NotFound,
        _ => {}
    }

    match nested_status.or(status) {
        Some(401 | 403) => ErrorKind::Auth,
        Some(400) => ErrorKind::Validation,
        Some(404) => ErrorKind::NotFound,
        _ => ErrorKind::Other,
    }
}

/// Normalize an error-bearing response body into one `GatewayError`.
///
/// `status` is the HTTP status when known; it is used to classify errors whose
/// body carries no recognizable name or code. A body with no structured error
/// at all yields `fallback`.
pub fn normalize(body: &Value, status: Option<u16>, fallback: &str) -> GatewayError {
    let Some(error) = first_error(body) else {
        return match status {
            Some(s) if !(200..300).contains(&s) => GatewayError::Network(fallback.to_owned()),
            _ => GatewayError::Unexpected(fallback.to_owned()),
        };
    };
    let message = error_message(error).unwrap_or_else(|| fallback.to_owned());
    match error_kind(error, status) {
        ErrorKind::Auth => GatewayError::Auth(message),
        ErrorKind::Validation => GatewayError::Validation(message),
        ErrorKind::NotFound => GatewayError::NotFound(message),
        ErrorKind::Other => GatewayError::Unexpected(message),
    }
}
