use super::*;

#[test]
fn validate_signup_input_trims_username_and_email() {
    assert_eq!(
        validate_signup_input(" grace ", " grace@example.com ", "pw"),
        Ok(SignupInput {
            username: "grace".to_owned(),
            email: "grace@example.com".to_owned(),
            password: "pw".to_owned(),
        })
    );
}

#[test]
fn validate_signup_input_requires_every_field() {
    let expected = Err("Fill in username, email and password.");
    assert_eq!(validate_signup_input("", "g@x", "pw"), expected);
    assert_eq!(validate_signup_input("g", "  ", "pw"), expected);
    assert_eq!(validate_signup_input("g", "g@x", ""), expected);
}

#[test]
fn submit_label_reflects_pending_request() {
    assert_eq!(submit_label(&SubmitState::Idle), "Sign Up");
    assert_eq!(submit_label(&SubmitState::Submitting), "Creating Account...");
}
