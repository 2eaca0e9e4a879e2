use crate::User;

#[test]
fn test_user_new() {
    let user = User::new(
        "alice@example.com".to_string(),
        "$2b$12$abcdefghijklmnopqrstuv".to_string(),
        Some("Alice".to_string()),
    );

    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.password_hash, "$2b$12$abcdefghijklmnopqrstuv");
    assert_eq!(user.name.as_deref(), Some("Alice"));
}

#[test]
fn test_user_new_without_name() {
    let user = User::new("bob@example.com".to_string(), "hash".to_string(), None);

    assert_eq!(user.email, "bob@example.com");
    assert_eq!(user.name, None);
}
