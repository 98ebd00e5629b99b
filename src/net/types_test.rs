use super::*;

// =============================================================
// Serialization shape
// =============================================================

#[test]
fn register_request_serializes_exactly_four_fields() {
    let req = RegisterRequest {
        name: "John Doe".into(),
        email: "john.doe@example.com".into(),
        password: "Password123".into(),
        address: "123 Main St".into(),
    };
    let value = serde_json::to_value(&req).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert_eq!(obj["name"], "John Doe");
    assert_eq!(obj["email"], "john.doe@example.com");
    assert_eq!(obj["password"], "Password123");
    assert_eq!(obj["address"], "123 Main St");
}

#[test]
fn register_request_has_no_confirm_field() {
    let req = RegisterRequest {
        name: String::new(),
        email: String::new(),
        password: String::new(),
        address: String::new(),
    };
    let json = serde_json::to_string(&req).unwrap();
    assert!(!json.contains("confirm"));
}

#[test]
fn login_request_serializes_email_and_password() {
    let req = LoginRequest {
        email: "john.doe@example.com".into(),
        password: "Password123".into(),
    };
    let value = serde_json::to_value(&req).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj["email"], "john.doe@example.com");
    assert_eq!(obj["password"], "Password123");
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn session_parses_from_api_payload() {
    let session: Session = serde_json::from_str(
        r#"{"id":"u-1","name":"John Doe","email":"john.doe@example.com"}"#,
    )
    .unwrap();
    assert_eq!(session.id, "u-1");
    assert_eq!(session.name, "John Doe");
    assert_eq!(session.email, "john.doe@example.com");
}

#[test]
fn session_round_trips() {
    let session = Session {
        id: "u-2".into(),
        name: "Jane".into(),
        email: "jane@example.com".into(),
    };
    let json = serde_json::to_string(&session).unwrap();
    let back: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(back, session);
}
