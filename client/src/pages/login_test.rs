use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  editor@example.org ", "s3cret"),
        Ok(("editor@example.org".to_owned(), "s3cret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("a@b.org", " pass "),
        Ok(("a@b.org".to_owned(), " pass ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.org", ""), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_rejects_email_without_at() {
    assert_eq!(validate_login_input("editor", "pw"), Err("Enter a valid email address."));
}
