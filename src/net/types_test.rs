use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_parses_login_payload_without_created_at() {
    let raw = r#"{"id":1,"first_name":"A","last_name":"B","email":"a@b.com","role":"user"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.first_name, "A");
    assert_eq!(user.created_at, None);
}

#[test]
fn user_role_defaults_to_user_when_missing() {
    let raw = r#"{"id":2,"first_name":"A","last_name":"B","email":"a@b.com"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.role, "user");
}

#[test]
fn user_parses_full_profile_payload() {
    let raw = r#"{
        "id": 7,
        "first_name": "Grace",
        "last_name": "Hopper",
        "email": "grace@example.com",
        "role": "admin",
        "created_at": "2024-03-05 14:30:00"
    }"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.role, "admin");
    assert_eq!(user.created_at.as_deref(), Some("2024-03-05 14:30:00"));
}

// =============================================================
// LoginResponse / ApiErrorBody
// =============================================================

#[test]
fn login_response_parses_token_and_user() {
    let raw = r#"{
        "access_token": "T1",
        "user": {"id":1,"first_name":"A","last_name":"B","email":"a@b.com","role":"user"}
    }"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.access_token, "T1");
    assert_eq!(resp.user.first_name, "A");
}

#[test]
fn api_error_body_parses_error_message() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
    assert_eq!(body.error, "Invalid credentials");
}

// =============================================================
// AuthError
// =============================================================

#[test]
fn auth_error_new_accepts_str_and_string() {
    assert_eq!(AuthError::new("nope").message, "nope");
    assert_eq!(AuthError::new("nope".to_owned()), AuthError::new("nope"));
}
