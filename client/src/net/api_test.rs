use super::*;

#[test]
fn bearer_value_prefixes_scheme() {
    assert_eq!(bearer_value("abc123"), "Bearer abc123");
}

#[test]
fn unauthorized_and_forbidden_mean_no_session() {
    assert!(is_rejected_session(401));
    assert!(is_rejected_session(403));
    assert!(!is_rejected_session(200));
    assert!(!is_rejected_session(500));
}

#[test]
fn session_failed_error_names_status() {
    assert_eq!(
        session_failed_error(502),
        GateError::AuthCheckFailed("session endpoint returned 502".to_owned())
    );
}

#[test]
fn login_failed_message_hides_status_for_bad_credentials() {
    assert_eq!(login_failed_message(401), "Email or password is incorrect.");
    assert_eq!(login_failed_message(503), "login failed: 503");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_token_is_none_outside_browser() {
    assert!(read_token().is_none());
}

#[test]
fn stored_token_lets_login_succeed() {
    assert_eq!(token_write_result::<()>(Some(Ok(()))), Ok(()));
}

#[test]
fn failed_token_write_fails_login() {
    let expected = Err("Could not save session (storage unavailable).".to_owned());
    assert_eq!(token_write_result(Some(Err("QuotaExceededError"))), expected);
    assert_eq!(token_write_result::<()>(None), expected);
}
