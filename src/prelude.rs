//! Commonly used imports for handlers, services and repositories.

pub use actix_web::body::BoxBody;
pub use actix_web::http::StatusCode;
pub use actix_web::web::{self, Data, Json, Path, Query, ServiceConfig};
pub use actix_web::{HttpRequest, HttpResponse, Responder};
pub use chrono::{NaiveDate, NaiveDateTime};
pub use sea_orm::{DatabaseConnection, DbErr};
pub use uuid::Uuid;

pub use crate::errors::{Error, Success, Validation};

/// Current UTC time without timezone, the representation stored in the database
pub fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
