//! Standard fixture values shared across tests.
//!
//! These values describe the canonical test user and group. None of them are
//! real credentials.

/// Username of the standard test user.
pub static TEST_USERNAME: &str = "testuser";

/// Raw password of the standard test user.
pub static TEST_PASSWORD: &str = "password123";

/// Email of the standard test user.
pub static TEST_EMAIL: &str = "testuser@example.com";

/// Name of the standard test group.
pub static TEST_GROUP_NAME: &str = "Test Group";

/// Password stored by fixtures that insert users directly.
///
/// Starts with `!` so it is never accepted by password verification.
pub static TEST_UNUSABLE_PASSWORD: &str = "!fixture-password";
