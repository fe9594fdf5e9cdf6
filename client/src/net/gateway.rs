//! Typed GraphQL operations against the UserDb backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hold a cloned `GatewayClient` from context and `spawn_local` its
//! operations. Every request reads the token from the session store at send
//! time, so login/logout take effect on the very next call.
//!
//! ERROR HANDLING
//! ==============
//! Each operation returns `Result<_, GatewayError>`; backend error payloads in
//! either shape are normalized by `errors::normalize`, with a per-operation
//! fallback message when the backend gives none.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::errors::{self, GENERIC_FAILURE, GatewayError};
use super::operations::{self, fields};
use super::transport::Transport;
use super::types::{AuthPayload, GraphqlRequest, UserInput, UserRecord};
use crate::state::session::SessionStore;
use crate::state::storage::Storage;

/// Fallback shown when a login fails without a backend message.
pub const LOGIN_FAILURE: &str = "Login failed. Please check your credentials.";
/// Fallback shown when a registration fails without a backend message.
pub const SIGNUP_FAILURE: &str = "Signup failed.";

/// GraphQL client over one transport, authenticated from one session store.
pub struct GatewayClient<T: Transport, S: Storage> {
    transport: Arc<T>,
    session: SessionStore<S>,
}

impl<T: Transport, S: Storage> Clone for GatewayClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            session: self.session.clone(),
        }
    }
}

#[derive(serde::Deserialize)]
struct DeletedRecord {
    #[serde(rename = "documentId")]
    id: String,
}

impl<T: Transport, S: Storage> GatewayClient<T, S> {
    pub fn new(transport: T, session: SessionStore<S>) -> Self {
        Self {
            transport: Arc::new(transport),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Authenticate with a username or email and a password.
    ///
    /// # Errors
    ///
    /// `Auth`/`Validation` for rejected credentials, `Network` when the backend
    /// is unreachable.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<AuthPayload, GatewayError> {
        self.execute(operations::login_request(identifier, password), fields::LOGIN, LOGIN_FAILURE)
            .await
    }

    /// Create an account and receive its token.
    ///
    /// # Errors
    ///
    /// `Validation` for duplicate identities or rejected fields, `Network` when
    /// the backend is unreachable.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<AuthPayload, GatewayError> {
        self.execute(
            operations::register_request(username, email, password),
            fields::REGISTER,
            SIGNUP_FAILURE,
        )
        .await
    }

    /// Fetch all records, oldest first.
    ///
    /// # Errors
    ///
    /// `Auth` when the token is missing or expired, `Network` on transport failure.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, GatewayError> {
        self.execute(operations::list_users_request(), fields::LIST_USERS, GENERIC_FAILURE)
            .await
    }

    /// Create a record; the backend assigns its id.
    ///
    /// # Errors
    ///
    /// `Validation` when the backend rejects a field.
    pub async fn create_user(&self, input: &UserInput) -> Result<UserRecord, GatewayError> {
        self.execute(operations::create_user_request(input), fields::CREATE_USER, GENERIC_FAILURE)
            .await
    }

    /// Apply the submitted fields to record `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` for a stale id, `Validation` when the backend rejects a field.
    pub async fn update_user(&self, id: &str, input: &UserInput) -> Result<UserRecord, GatewayError> {
        self.execute(operations::update_user_request(id, input), fields::UPDATE_USER, GENERIC_FAILURE)
            .await
    }

    /// Delete record `id`, returning the deleted id.
    ///
    /// # Errors
    ///
    /// `NotFound` for a stale id.
    pub async fn delete_user(&self, id: &str) -> Result<String, GatewayError> {
        let deleted: DeletedRecord = self
            .execute(operations::delete_user_request(id), fields::DELETE_USER, GENERIC_FAILURE)
            .await?;
        Ok(deleted.id)
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        request: GraphqlRequest,
        field: &str,
        fallback: &str,
    ) -> Result<R, GatewayError> {
        let token = self.session.token();
        log::debug!(
            "graphql {} (authenticated: {})",
            request.operation_name,
            token.is_some()
        );
        let response = self
            .transport
            .send(&request, token.as_deref())
            .await
            .map_err(|e| e.or_fallback(fallback))
            .inspect_err(|e| log::warn!("graphql {} transport failure: {e}", request.operation_name))?;

        let status = Some(response.status);
        let ok_status = (200..300).contains(&response.status);
        if errors::has_errors(&response.body) || !ok_status {
            let err = errors::normalize(&response.body, status, fallback);
            log::warn!("graphql {} failed: {err:?}", request.operation_name);
            return Err(err);
        }

        let value = response
            .body
            .get("data")
            .and_then(|data| data.get(field))
            .filter(|value| !value.is_null())
            .cloned()
            .ok_or_else(|| {
                // Null root field with no errors: the document does not exist.
                if matches!(field, fields::UPDATE_USER | fields::DELETE_USER) {
                    GatewayError::NotFound("Record not found.".to_owned())
                } else {
                    GatewayError::Unexpected(fallback.to_owned())
                }
            })?;

        serde_json::from_value(value).map_err(|e| {
            log::warn!("graphql {} returned an unexpected shape: {e}", request.operation_name);
            GatewayError::Unexpected(fallback.to_owned())
        })
    }
}
