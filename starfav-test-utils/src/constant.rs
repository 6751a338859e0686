//! Standard values used across test fixtures.

/// Default username for inserted test users.
pub static TEST_USERNAME: &str = "test_user";

/// Placeholder password hash for inserted test users. Not a real credential.
pub static TEST_PASSWORD: &str = "$argon2id$test-placeholder-hash";

/// Default email for inserted test users.
pub static TEST_EMAIL: &str = "test_user@example.com";
