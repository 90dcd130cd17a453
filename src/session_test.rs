use super::*;

#[test]
fn deserializes_minimal_record() {
    let user: SessionUser = serde_json::from_str(r#"{"id":"u1"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert!(user.email.is_none());
    assert!(user.name.is_none());
    assert!(user.role.is_none());
}

#[test]
fn deserializes_full_record_and_ignores_unknown_fields() {
    let user: SessionUser = serde_json::from_str(
        r#"{"id":"u2","email":"ana@example.org","name":"Ana","role":"editor","created_at":"2024-01-01"}"#,
    )
    .unwrap();
    assert_eq!(user.email.as_deref(), Some("ana@example.org"));
    assert_eq!(user.role.as_deref(), Some("editor"));
}

#[test]
fn display_name_prefers_name_then_email_then_id() {
    let mut user = SessionUser {
        id: "u3".to_owned(),
        email: Some("ops@example.org".to_owned()),
        name: Some("Ops".to_owned()),
        role: None,
    };
    assert_eq!(user.display_name(), "Ops");
    user.name = None;
    assert_eq!(user.display_name(), "ops@example.org");
    user.email = None;
    assert_eq!(user.display_name(), "u3");
}
