use crate::ClientError;

use bt_core::{CoreError, FetchError, IdentityError, NavigationIntent};

#[test]
fn test_session_error_redirects_to_login() {
    let err = ClientError::from(IdentityError::not_found());

    assert_eq!(
        err.navigation_intent(),
        Some(NavigationIntent::RedirectToLogin)
    );
    assert_eq!(err.user_message(), "Session Expired. Please log in again.");
}

#[test]
fn test_reset_not_started_redirects_to_reset() {
    let err = ClientError::reset_not_started();

    assert_eq!(
        err.navigation_intent(),
        Some(NavigationIntent::RedirectToPasswordReset)
    );
}

#[test]
fn test_fetch_error_surfaces_server_message() {
    let err = ClientError::from(FetchError::server(401, Some("Invalid password".into())));

    assert_eq!(err.user_message(), "Invalid password");
    assert!(err.navigation_intent().is_none());
}

#[test]
fn test_validation_error_surfaces_form_message() {
    let err = ClientError::from(CoreError::validation("Please fill in all fields"));

    assert_eq!(err.user_message(), "Please fill in all fields");
}

#[test]
fn test_display_names_the_failure() {
    let err = ClientError::reset_not_started();

    assert!(err.to_string().contains("No password reset in progress"));
}
