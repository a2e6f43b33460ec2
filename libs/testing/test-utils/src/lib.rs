//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the domain crates:
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic request bodies (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! let builder = TestDataBuilder::from_test_name("my_test");
//!
//! let body = builder.create_body("monitor");
//! # }
//! ```

use serde_json::{Value, json};

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic values
///
/// Bodies are plain JSON so request tests exercise the same parsing path as
/// real clients.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Unique product name for this test
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let name = TestDataBuilder::new(7).name("monitor");
    /// assert_eq!(name, "test-monitor-7");
    /// ```
    pub fn name(&self, suffix: &str) -> String {
        format!("test-{}-{}", suffix, self.seed)
    }

    /// Positive price in `[1, 1000)` with two decimals
    pub fn price(&self) -> f64 {
        let cents = self.seed % 99_900 + 100;
        cents as f64 / 100.0
    }

    /// Body for `POST /api/products`
    pub fn create_body(&self, suffix: &str) -> Value {
        json!({
            "name": self.name(suffix),
            "price": self.price(),
        })
    }

    /// Body for `PUT /api/products/{id}`
    pub fn update_body(&self, suffix: &str, availability: bool) -> Value {
        json!({
            "name": self.name(suffix),
            "price": self.price(),
            "availability": availability,
        })
    }
}

/// Test assertion helpers
pub mod assertions {
    use serde_json::Value;

    /// Assert that a JSON error body carries a field error with this message
    pub fn assert_field_error(body: &Value, field: &str, message: &str) {
        let details = body["details"]
            .as_array()
            .unwrap_or_else(|| panic!("expected details array in {}", body));
        assert!(
            details
                .iter()
                .any(|d| d["field"] == field && d["message"] == message),
            "no {} error {:?} in {}",
            field,
            message,
            body
        );
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}
