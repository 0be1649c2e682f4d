use std::collections::BTreeMap;
use std::fmt;

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

/// Error returned by services and surfaced to the HTTP layer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed input such as a non-positive identifier or duration
    #[error("{message}")]
    InvalidArgument { message: String },
    #[error("{message}")]
    NotFound { message: String },
    /// Uniqueness violation, e.g. a duplicate movie title
    #[error("{message}")]
    Conflict { message: String },
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("Validation failed")]
    Validation { errors: Validation },
    #[error("{message}")]
    Internal { message: String },
}

impl Error {
    pub fn invalid_argument<T: ToString>(message: T) -> Self {
        Self::InvalidArgument {
            message: message.to_string(),
        }
    }

    pub fn not_found<T: ToString>(message: T) -> Self {
        Self::NotFound {
            message: message.to_string(),
        }
    }

    pub fn conflict<T: ToString>(message: T) -> Self {
        Self::Conflict {
            message: message.to_string(),
        }
    }

    pub fn unauthorized<T: ToString>(message: T) -> Self {
        Self::Unauthorized {
            message: message.to_string(),
        }
    }

    pub fn internal<T: ToString>(message: T) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    /// Reject identifiers that can never match a row
    pub fn ensure_positive(value: i64, name: &str) -> Result<(), Self> {
        if value <= 0 {
            return Err(Self::invalid_argument(format!("{name} <= 0")));
        }

        Ok(())
    }
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(message)) = err.sql_err() {
            ::tracing::warn!(error = %message, "Unique constraint violated");

            return Self::conflict("Resource already exists");
        }

        ::tracing::error!(error = %err, "Database error");

        Self::internal(err)
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        ::tracing::error!(error = %err, "Password hashing error");

        Self::internal(err)
    }
}

impl From<Validation> for Error {
    fn from(errors: Validation) -> Self {
        Self::Validation { errors }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let body = match self {
            Self::Validation { errors } => json!({
                "message": self.to_string(),
                "errors": errors,
            }),
            // details are logged where the error is created
            Self::Internal { .. } => json!({ "message": "Internal server error" }),
            _ => json!({ "message": self.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Field level validation errors collected before touching the store
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Validation {
    errors: BTreeMap<String, Vec<String>>,
}

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F: ToString, M: ToString>(&mut self, field: F, message: M) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn extend<F: ToString>(&mut self, field: F, messages: Vec<String>) {
        let field = field.to_string();

        for message in messages {
            self.add(&field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// `Ok(())` when nothing was collected, otherwise the validation error
    pub fn finish(self) -> Result<(), Error> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.into())
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, messages) in &self.errors {
            writeln!(f, "{}: {}", field, messages.join(", "))?;
        }

        Ok(())
    }
}

/// Generic error body, used by the OpenAPI document
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Movie with id 1 not found")]
    pub message: String,
}

/// Empty success acknowledgement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Success;

impl Responder for Success {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(json!({ "message": "Success" }))
    }
}
