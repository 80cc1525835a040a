//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! #[ignore] // Requires Docker
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let username = builder.username("main");
//!     let title = builder.name("todo", "main");
//! }
//! ```

use uuid::Uuid;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// Values derive from a seed, so a test produces the same data on every run
/// while different tests do not collide on unique columns.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test name. This is the usual way to build one.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_todo");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A UUID that no row will have, for not-found cases.
    pub fn missing_id(&self) -> Uuid {
        let bytes = self.seed.to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        Uuid::from_bytes(uuid_bytes)
    }

    /// Free-form unique text, e.g. a todo title.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("todo", "main"), "test-todo-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A username within the 3..=50 character limit.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let username = TestDataBuilder::new(u64::MAX).username("main");
    /// assert!(username.len() <= 50);
    /// ```
    pub fn username(&self, suffix: &str) -> String {
        let mut username = format!("u{:x}_{}", self.seed, suffix);
        username.truncate(50);
        username
    }
}

/// Test assertion helpers
pub mod assertions {
    use uuid::Uuid;

    /// Assert that two UUIDs are equal with a nice error message
    pub fn assert_uuid_eq(actual: Uuid, expected: Uuid, context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected UUID {}, got {}",
            context, expected, actual
        );
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a serialized user carries no password material.
    pub fn assert_no_password(user: &serde_json::Value) {
        let object = user
            .as_object()
            .unwrap_or_else(|| panic!("expected a JSON object, got {}", user));
        for key in ["password", "passwordHash", "password_hash"] {
            assert!(
                !object.contains_key(key),
                "user JSON must not contain `{}`: {}",
                key,
                user
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.missing_id(), builder2.missing_id());
        assert_eq!(builder1.username("a"), builder2.username("a"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.missing_id(), builder2.missing_id());
        assert_ne!(builder1.username("a"), builder2.username("a"));
    }

    #[test]
    fn test_username_fits_length_rule() {
        let username = TestDataBuilder::new(0).username("x");
        assert!(username.len() >= 3);

        let long = TestDataBuilder::new(u64::MAX).username(&"y".repeat(80));
        assert_eq!(long.len(), 50);
    }

    #[test]
    fn test_assert_no_password_accepts_sanitized_user() {
        assertions::assert_no_password(&serde_json::json!({
            "username": "jsmith",
            "name": null
        }));
    }

    #[test]
    #[should_panic(expected = "must not contain `password`")]
    fn test_assert_no_password_rejects_password() {
        assertions::assert_no_password(&serde_json::json!({
            "username": "jsmith",
            "password": "hunter22"
        }));
    }
}
