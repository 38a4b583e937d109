use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret"),
        Ok(LoginCredentials { email: "user@example.com".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let credentials = validate_login_input("a@b.com", " pass ").unwrap();
    assert_eq!(credentials.password, " pass ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_rejects_email_without_at() {
    assert_eq!(validate_login_input("user.example.com", "secret"), Err("Enter a valid email address."));
}
