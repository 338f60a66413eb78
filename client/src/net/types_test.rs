use super::*;
use serde_json::json;

#[test]
fn user_decodes_partial_object() {
    let user: User = serde_json::from_value(json!({ "name": "Admin" })).unwrap();
    assert_eq!(user.name.as_deref(), Some("Admin"));
    assert_eq!(user.email, None);
    assert!(user.extra.is_empty());
}

#[test]
fn user_preserves_unknown_fields_on_reencode() {
    let raw = json!({
        "name": "Admin",
        "email": "admin@ecoride.com",
        "role": "admin",
        "_id": "64f0",
        "permissions": ["users:write"]
    });
    let user: User = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(user.extra.get("_id"), Some(&json!("64f0")));
    assert_eq!(serde_json::to_value(&user).unwrap(), raw);
}

#[test]
fn user_rejects_non_object_json() {
    assert!(serde_json::from_str::<User>("\"admin\"").is_err());
    assert!(serde_json::from_str::<User>("42").is_err());
    assert!(serde_json::from_str::<User>("null").is_err());
}

#[test]
fn display_name_prefers_name_then_email() {
    let mut user = User { email: Some("ops@ecoride.com".to_owned()), ..User::default() };
    assert_eq!(user.display_name(), "ops@ecoride.com");
    user.name = Some("Ops".to_owned());
    assert_eq!(user.display_name(), "Ops");
    assert_eq!(User::default().display_name(), "Operator");
}

#[test]
fn envelope_failure_shape_has_no_data() {
    let env: Envelope<LoginData> =
        serde_json::from_value(json!({ "success": false, "message": "Invalid credentials" })).unwrap();
    assert!(!env.success);
    assert!(env.data.is_none());
    assert_eq!(env.message.as_deref(), Some("Invalid credentials"));
}

#[test]
fn envelope_success_shape_carries_login_data() {
    let env: Envelope<LoginData> = serde_json::from_value(json!({
        "success": true,
        "data": { "user": { "name": "Admin" }, "token": "abc123" }
    }))
    .unwrap();
    let data = env.data.unwrap();
    assert_eq!(data.token, "abc123");
    assert_eq!(data.user.name.as_deref(), Some("Admin"));
}

#[test]
fn envelope_missing_success_defaults_false() {
    let env: Envelope<Value> = serde_json::from_value(json!({ "data": [] })).unwrap();
    assert!(!env.success);
}
