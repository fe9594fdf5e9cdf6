//! GraphQL documents and request builders for the six backend operations.

#[cfg(test)]
#[path = "operations_test.rs"]
mod operations_test;

use super::types::{GraphqlRequest, UserInput};

/// Maximum number of records requested by `list_users`.
pub const LIST_PAGE_LIMIT: u32 = 100;

const LOGIN: &str = r"
mutation Login($identifier: String!, $password: String!) {
  login(input: { identifier: $identifier, password: $password }) {
    jwt
    user { id username email }
  }
}";

const REGISTER: &str = r"
mutation Register($username: String!, $email: String!, $password: String!) {
  register(input: { username: $username, email: $email, password: $password }) {
    jwt
    user { id username email }
  }
}";

const LIST_USERS: &str = r"
query UserDbs($sort: [String], $pagination: PaginationArg) {
  userDbs(sort: $sort, pagination: $pagination) {
    documentId name dateOfBirth email phone active createdAt updatedAt
  }
}";

const CREATE_USER: &str = r"
mutation CreateUserDb($data: UserDbInput!) {
  createUserDb(data: $data) {
    documentId name dateOfBirth email phone active createdAt updatedAt
  }
}";

const UPDATE_USER: &str = r"
mutation UpdateUserDb($documentId: ID!, $data: UserDbInput!) {
  updateUserDb(documentId: $documentId, data: $data) {
    documentId name dateOfBirth email phone active createdAt updatedAt
  }
}";

const DELETE_USER: &str = r"
mutation DeleteUserDb($documentId: ID!) {
  deleteUserDb(documentId: $documentId) { documentId }
}";

/// Root field names under `data` for each operation.
pub mod fields {
    pub const LOGIN: &str = "login";
    pub const REGISTER: &str = "register";
    pub const LIST_USERS: &str = "userDbs";
    pub const CREATE_USER: &str = "createUserDb";
    pub const UPDATE_USER: &str = "updateUserDb";
    pub const DELETE_USER: &str = "deleteUserDb";
}

pub fn login_request(identifier: &str, password: &str) -> GraphqlRequest {
    GraphqlRequest {
        query: LOGIN,
        operation_name: "Login",
        variables: serde_json::json!({ "identifier": identifier, "password": password }),
    }
}

pub fn register_request(username: &str, email: &str, password: &str) -> GraphqlRequest {
    GraphqlRequest {
        query: REGISTER,
        operation_name: "Register",
        variables: serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        }),
    }
}

/// Oldest records first, so newly created rows land at the bottom of the table.
pub fn list_users_request() -> GraphqlRequest {
    GraphqlRequest {
        query: LIST_USERS,
        operation_name: "UserDbs",
        variables: serde_json::json!({
            "sort": ["createdAt:asc"],
            "pagination": { "limit": LIST_PAGE_LIMIT },
        }),
    }
}

pub fn create_user_request(input: &UserInput) -> GraphqlRequest {
    GraphqlRequest {
        query: CREATE_USER,
        operation_name: "CreateUserDb",
        variables: serde_json::json!({ "data": input }),
    }
}

pub fn update_user_request(id: &str, input: &UserInput) -> GraphqlRequest {
    GraphqlRequest {
        query: UPDATE_USER,
        operation_name: "UpdateUserDb",
        variables: serde_json::json!({ "documentId": id, "data": input }),
    }
}

pub fn delete_user_request(id: &str) -> GraphqlRequest {
    GraphqlRequest {
        query: DELETE_USER,
        operation_name: "DeleteUserDb",
        variables: serde_json::json!({ "documentId": id }),
    }
}
