use crate::User;

use serde_json::json;

#[test]
fn test_user_serializes_only_record_fields() {
    let user = User {
        id: 7,
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
    };

    let value = serde_json::to_value(&user).unwrap();

    assert_eq!(
        value,
        json!({ "id": 7, "name": "Ada", "email": "ada@example.com" })
    );
}

#[test]
fn test_user_deserializes_from_api_body() {
    let user: User =
        serde_json::from_str(r#"{"id":3,"name":"Grace","email":"grace@example.com"}"#).unwrap();

    assert_eq!(user.id, 3);
    assert_eq!(user.name, "Grace");
    assert_eq!(user.email, "grace@example.com");
}
