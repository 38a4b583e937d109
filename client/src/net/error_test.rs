use super::*;

fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::Status { status, body: body.to_owned() }
}

#[test]
fn status_is_only_reported_for_http_failures() {
    assert_eq!(status_error(404, "").status(), Some(404));
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
    assert_eq!(ApiError::Unavailable.status(), None);
}

#[test]
fn unauthorized_detects_401() {
    assert!(status_error(401, "").is_unauthorized());
    assert!(!status_error(403, "").is_unauthorized());
}

#[test]
fn user_message_flattens_field_errors() {
    let err = status_error(400, r#"{"email": ["Enter a valid email address."], "name": ["This field is required."]}"#);
    assert_eq!(
        err.user_message(),
        "email: Enter a valid email address.; name: This field is required."
    );
}

#[test]
fn user_message_uses_non_field_errors_verbatim() {
    let err = status_error(400, r#"{"non_field_errors": ["Unable to log in with provided credentials."]}"#);
    assert_eq!(err.user_message(), "Unable to log in with provided credentials.");
}

#[test]
fn user_message_uses_detail_string() {
    let err = status_error(401, r#"{"detail": "Invalid token."}"#);
    assert_eq!(err.user_message(), "Invalid token.");
}

#[test]
fn user_message_falls_back_to_status_for_non_json() {
    assert_eq!(status_error(502, "<html>Bad gateway</html>").user_message(), "Request failed (502)");
}

#[test]
fn display_messages() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
    assert_eq!(status_error(500, "").to_string(), "request failed with status 500");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "unexpected response body: eof");
}
