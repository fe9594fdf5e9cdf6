use super::*;

#[test]
fn login_request_carries_credentials_as_variables() {
    let request = login_request("ada", "secret");
    assert_eq!(request.operation_name, "Login");
    assert!(request.query.contains("login(input:"));
    assert_eq!(request.variables, serde_json::json!({ "identifier": "ada", "password": "secret" }));
}

#[test]
fn register_request_carries_all_three_fields() {
    let request = register_request("ada", "ada@example.com", "pw");
    assert_eq!(request.operation_name, "Register");
    assert_eq!(
        request.variables,
        serde_json::json!({ "username": "ada", "email": "ada@example.com", "password": "pw" })
    );
}

#[test]
fn list_users_request_sorts_oldest_first_with_page_limit() {
    let request = list_users_request();
    assert_eq!(request.operation_name, "UserDbs");
    assert_eq!(request.variables["sort"], serde_json::json!(["createdAt:asc"]));
    assert_eq!(request.variables["pagination"]["limit"], LIST_PAGE_LIMIT);
}

#[test]
fn record_operations_select_the_full_record() {
    for request in [
        list_users_request(),
        create_user_request(&UserInput::default()),
        update_user_request("d-1", &UserInput::default()),
    ] {
        for field in ["documentId", "dateOfBirth", "phone", "active", "createdAt", "updatedAt"] {
            assert!(request.query.contains(field), "{} is missing {field}", request.operation_name);
        }
    }
}

#[test]
fn update_user_request_targets_document_id() {
    let input = UserInput { active: Some(true), ..UserInput::default() };
    let request = update_user_request("d-9", &input);
    assert_eq!(
        request.variables,
        serde_json::json!({ "documentId": "d-9", "data": { "active": true } })
    );
}

#[test]
fn delete_user_request_only_sends_document_id() {
    let request = delete_user_request("d-3");
    assert_eq!(request.operation_name, "DeleteUserDb");
    assert_eq!(request.variables, serde_json::json!({ "documentId": "d-3" }));
}
