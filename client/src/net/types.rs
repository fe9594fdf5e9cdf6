//! Wire DTOs for the GraphQL backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's GraphQL selection sets. Deserialization is
//! lenient where the backend is known to vary: ids and big integers may arrive
//! as JSON numbers or strings, and nullable text fields decode as empty strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Identity of the signed-in account, as returned by `login`/`register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Backend account id.
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    pub username: String,
    pub email: String,
}

/// Token and profile issued on successful authentication.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthPayload {
    /// Opaque bearer credential.
    pub jwt: String,
    pub user: Profile,
}

/// A single UserDb record as stored by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Backend-assigned identity, never mutated once assigned.
    #[serde(rename = "documentId")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub name: String,
    /// ISO calendar date (`YYYY-MM-DD`).
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub date_of_birth: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_scalar")]
    pub phone: i64,
    #[serde(default, deserialize_with = "deserialize_bool_or_null")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Mutation payload for `createUserDb`/`updateUserDb`.
///
/// Absent fields are omitted from the wire so an update only touches what
/// the caller submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Standard GraphQL POST body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: &'static str,
    pub operation_name: &'static str,
    pub variables: serde_json::Value,
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_bool_or_null<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_i64_from_scalar<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("phone out of range: {n}"))),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("phone is not an integer: {s}"))),
        other => Err(D::Error::custom(format!("expected integer phone, got {other}"))),
    }
}
