//! In-memory GraphQL backend used by gateway and page tests.
//!
//! Answers the six operations by `operationName`, records the bearer header
//! of every request, and reports failures in both error shapes.

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use super::errors::GatewayError;
use super::transport::{Transport, TransportResponse, authorization_header};
use super::types::{GraphqlRequest, UserRecord};

pub const VALID_PASSWORD: &str = "correct horse";
pub const VALID_TOKEN: &str = "jwt-valid";

#[derive(Default)]
struct Inner {
    records: Vec<UserRecord>,
    usernames: Vec<String>,
    seen_headers: Vec<Option<String>>,
    seen_operations: Vec<&'static str>,
    offline: bool,
    single_shape: bool,
    tick: u64,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Arc<Mutex<Inner>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        let backend = Self::default();
        backend.inner.lock().unwrap().usernames.push("ada".to_owned());
        backend
    }

    pub fn seed(&self, record: UserRecord) {
        self.inner.lock().unwrap().records.push(record);
    }

    pub fn set_offline(&self, offline: bool) {
        self.inner.lock().unwrap().offline = offline;
    }

    /// Report domain failures as `{ "data": null, "error": {..} }` with status 200.
    pub fn set_single_shape_errors(&self, single: bool) {
        self.inner.lock().unwrap().single_shape = single;
    }

    pub fn seen_headers(&self) -> Vec<Option<String>> {
        self.inner.lock().unwrap().seen_headers.clone()
    }

    pub fn seen_operations(&self) -> Vec<&'static str> {
        self.inner.lock().unwrap().seen_operations.clone()
    }

    fn answer(&self, request: &GraphqlRequest, header: Option<&str>) -> TransportResponse {
        let mut inner = self.inner.lock().unwrap();
        inner.tick += 1;
        let vars = &request.variables;
        let authorized = header == Some(format!("Bearer {VALID_TOKEN}").as_str());
        let single_shape = inner.single_shape;

        let body = match request.operation_name {
            "Login" => {
                let identifier = vars["identifier"].as_str().unwrap_or_default();
                if inner.usernames.iter().any(|u| u == identifier) && vars["password"] == VALID_PASSWORD {
                    auth_payload("login", identifier)
                } else {
                    batched_error("ValidationError", "Invalid identifier or password", "BAD_USER_INPUT")
                }
            }
            "Register" => {
                let username = vars["username"].as_str().unwrap_or_default().to_owned();
                if inner.usernames.contains(&username) {
                    let message = "Email or Username are already taken";
                    if single_shape {
                        single_error("ValidationError", message)
                    } else {
                        batched_error("ApplicationError", message, "BAD_USER_INPUT")
                    }
                } else {
                    inner.usernames.push(username.clone());
                    auth_payload("register", &username)
                }
            }
            _ if !authorized => {
                return TransportResponse {
                    status: 401,
                    body: json!({ "data": null, "error": { "status": 401, "name": "UnauthorizedError", "message": "Missing or invalid credentials" } }),
                };
            }
            "UserDbs" => json!({ "data": { "userDbs": inner.records } }),
            "CreateUserDb" => {
                let data = &vars["data"];
                if data["email"].as_str().is_some_and(|e| !e.contains('@')) {
                    batched_error("ValidationError", "email must be a valid email", "BAD_USER_INPUT")
                } else {
                    let stamp = format!("2024-01-01T00:00:{:02}.000Z", inner.tick);
                    let record = UserRecord {
                        id: uuid::Uuid::new_v4().to_string(),
                        name: text(data, "name"),
                        date_of_birth: text(data, "dateOfBirth"),
                        email: text(data, "email"),
                        phone: data["phone"].as_i64().unwrap_or_default(),
                        active: data["active"].as_bool().unwrap_or_default(),
                        created_at: Some(stamp.clone()),
                        updated_at: Some(stamp),
                    };
                    inner.records.push(record.clone());
                    json!({ "data": { "createUserDb": record } })
                }
            }
            "UpdateUserDb" => {
                let id = vars["documentId"].as_str().unwrap_or_default();
                let data = vars["data"].clone();
                match inner.records.iter_mut().find(|r| r.id == id) {
                    Some(record) => {
                        if let Some(v) = data["name"].as_str() {
                            record.name = v.to_owned();
                        }
                        if let Some(v) = data["dateOfBirth"].as_str() {
                            record.date_of_birth = v.to_owned();
                        }
                        if let Some(v) = data["email"].as_str() {
                            record.email = v.to_owned();
                        }
                        if let Some(v) = data["phone"].as_i64() {
                            record.phone = v;
                        }
                        if let Some(v) = data["active"].as_bool() {
                            record.active = v;
                        }
                        json!({ "data": { "updateUserDb": record } })
                    }
                    None => not_found(single_shape),
                }
            }
            "DeleteUserDb" => {
                let id = vars["documentId"].as_str().unwrap_or_default().to_owned();
                let before = inner.records.len();
                inner.records.retain(|r| r.id != id);
                if inner.records.len() == before {
                    not_found(single_shape)
                } else {
                    json!({ "data": { "deleteUserDb": { "documentId": id } } })
                }
            }
            other => panic!("unexpected operation {other}"),
        };
        TransportResponse { status: 200, body }
    }
}

impl Transport for FakeBackend {
    async fn send(&self, request: &GraphqlRequest, bearer: Option<&str>) -> Result<TransportResponse, GatewayError> {
        let header = authorization_header(bearer);
        {
            let mut inner = self.inner.lock().unwrap();
            inner.seen_headers.push(header.clone());
            inner.seen_operations.push(request.operation_name);
            if inner.offline {
                return Err(GatewayError::Network("Failed to fetch".to_owned()));
            }
        }
        Ok(self.answer(request, header.as_deref()))
    }
}

fn text(data: &Value, key: &str) -> String {
    data[key].as_str().unwrap_or_default().to_owned()
}

fn auth_payload(root: &str, username: &str) -> Value {
    json!({ "data": { root: {
        "jwt": VALID_TOKEN,
        "user": { "id": 1, "username": username, "email": format!("{username}@example.com") }
    } } })
}

fn batched_error(name: &str, message: &str, code: &str) -> Value {
    json!({
        "data": null,
        "errors": [{
            "message": "Internal Server Error",
            "extensions": { "error": { "name": name, "message": message }, "code": code }
        }]
    })
}

fn single_error(name: &str, message: &str) -> Value {
    json!({ "data": null, "error": { "name": name, "message": message } })
}

fn not_found(single_shape: bool) -> Value {
    if single_shape {
        return single_error("NotFoundError", "Document not found");
    }
    json!({ "message": "Not Found", "extensions": { "error": { "name": "NotFoundError", "message": "Document not found" }, "code": "NOT_FOUND" } })
}
