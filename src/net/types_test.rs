use super::*;

// =============================================================
// AuthRequest serialization
// =============================================================

#[test]
fn login_request_serializes_with_action_tag() {
    let request = AuthRequest::Login {
        email: "a@b.com".to_owned(),
        password: "x".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({
            "action": "login",
            "email": "a@b.com",
            "password": "x"
        })
    );
}

#[test]
fn register_request_serializes_with_username() {
    let request = AuthRequest::Register {
        email: "a@b.com".to_owned(),
        username: "Bob".to_owned(),
        password: "x".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({
            "action": "register",
            "email": "a@b.com",
            "username": "Bob",
            "password": "x"
        })
    );
}

// =============================================================
// User deserialization
// =============================================================

#[test]
fn user_deserializes_from_success_body() {
    let user: User = serde_json::from_str(r#"{"id":1,"email":"a@b.com","username":"Bob"}"#).unwrap();
    assert_eq!(
        user,
        User {
            id: 1,
            email: "a@b.com".to_owned(),
            username: "Bob".to_owned(),
        }
    );
}

#[test]
fn user_id_accepts_integer_valued_float() {
    let user: User = serde_json::from_str(r#"{"id":7.0,"email":"a@b.com","username":"Bob"}"#).unwrap();
    assert_eq!(user.id, 7);
}

#[test]
fn user_id_rejects_fractional_number() {
    let result = serde_json::from_str::<User>(r#"{"id":7.5,"email":"a@b.com","username":"Bob"}"#);
    assert!(result.is_err());
}

#[test]
fn user_ignores_unknown_fields() {
    let user: User =
        serde_json::from_str(r#"{"id":1,"email":"a@b.com","username":"Bob","points":100}"#).unwrap();
    assert_eq!(user.username, "Bob");
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_reads_error_text() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"email taken"}"#).unwrap();
    assert_eq!(body.error.as_deref(), Some("email taken"));
}

#[test]
fn error_body_tolerates_missing_error_field() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.error, None);
}

// =============================================================
// AuthError
// =============================================================

#[test]
fn auth_error_display_includes_status() {
    let err = AuthError::Rejected {
        status: 401,
        message: Some("Invalid credentials".to_owned()),
    };
    assert_eq!(err.to_string(), "auth request rejected with status 401");
}

#[test]
fn auth_error_variants_are_distinct() {
    assert_ne!(
        AuthError::Rejected {
            status: 400,
            message: None
        },
        AuthError::Connection
    );
}
