use super::*;

#[test]
fn role_round_trips_through_str() {
    for role in [Role::Instructor, Role::Student] {
        let s = role.as_str();
        let back = Role::from_str(s).unwrap();
        assert_eq!(back, role);
    }
}

#[test]
fn role_from_str_invalid_returns_none() {
    assert_eq!(Role::from_str("professor"), None);
    assert_eq!(Role::from_str(""), None);
    assert_eq!(Role::from_str("INSTRUCTOR"), None);
}

#[test]
fn role_serde_uses_lowercase_strings() {
    assert_eq!(serde_json::to_value(Role::Instructor).unwrap(), serde_json::json!("instructor"));
    assert_eq!(serde_json::to_value(Role::Student).unwrap(), serde_json::json!("student"));
    let parsed: Role = serde_json::from_str("\"student\"").unwrap();
    assert_eq!(parsed, Role::Student);
}

#[test]
fn message_serde_round_trip() {
    let msg = Message {
        id: 7,
        channel_id: 2,
        author_name: "Maria Santos".into(),
        content: "Olá, professor!".into(),
        timestamp: "10:01".into(),
    };
    let json = serde_json::to_string(&msg).unwrap();
    let restored: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, msg);
}

#[test]
fn user_serde_shape() {
    let user = User {
        id: 1,
        name: "João Silva".into(),
        role: Role::Instructor,
        avatar_ref: "/placeholder.svg?height=32&width=32".into(),
    };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["name"], "João Silva");
    assert_eq!(value["role"], "instructor");
    assert_eq!(value["avatar_ref"], "/placeholder.svg?height=32&width=32");
}
