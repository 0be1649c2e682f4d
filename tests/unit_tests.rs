//! Unit test harness for movie-catalog
//!
//! This test suite covers:
//! - Configuration loading from config/default.toml
//! - Environment specific overrides and environment variable precedence
//! - Response cache memoization and namespace invalidation

mod unit;
