#![deny(warnings)]

#[macro_use(get, post, delete)]
extern crate actix_web;

pub mod api;
pub mod cache;
pub mod config;
pub mod controllers;
pub mod database;
pub mod entities;
pub mod errors;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod prelude;
pub mod requests;
pub mod responses;
pub mod router;
pub mod security;
pub mod services;

// Testing utilities (always available for integration tests)
pub mod testing;

pub use cache::{Cache, CacheBackend, CacheKey, CacheStats, LocalCache, NullCache, ResponseCache};
pub use errors::Error;
pub use metrics::{AppMetrics, MetricsMiddleware};
pub use security::{SecurityFilter, Sessions};
