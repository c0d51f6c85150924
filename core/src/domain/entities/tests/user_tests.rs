//! Unit tests for the user entity

use chrono::Utc;

use crate::domain::entities::user::{NewUser, Role, User};

#[test]
fn test_role_serialization() {
    assert_eq!(serde_json::to_value(Role::PaidUser).unwrap(), "paidUser");
    assert_eq!(Role::from_db("paidUser"), Some(Role::PaidUser));
    assert_eq!(Role::from_db("root"), None);
}

#[test]
fn test_password_hash_is_not_serialized() {
    let user = User {
        id: 3,
        email: "a@b.com".into(),
        password_hash: "$2b$10$hash".into(),
        role: Role::User,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("passwordHash").is_none());
    assert_eq!(json["email"], "a@b.com");
}

#[test]
fn test_new_user_defaults_to_user_role() {
    assert_eq!(NewUser::new("a@b.com", "h").role, Role::User);
}
