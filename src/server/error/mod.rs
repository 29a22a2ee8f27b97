//! Error types for the recipe server application.
//!
//! Domain errors live in submodules (authentication, configuration, recipes, users) and are
//! aggregated by [`Error`] along with request validation failures. Every error implements `IntoResponse` so
//! handlers can return `Result<_, Error>` and let the error pick its HTTP status.

pub mod auth;
pub mod config;
pub mod recipe;
pub mod route;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, recipe::RecipeError, user::UserError,
    },
};

/// Main error type for the recipe server application.
///
/// Aggregates all domain-specific error types and external library errors. `#[from]`
/// conversions let the `?` operator lift any of them into `Error`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing session, unknown user, bad credentials).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Recipe, tag or ingredient error (not found, invalid price, foreign ownership).
    #[error(transparent)]
    RecipeError(#[from] RecipeError),
    /// User account error (duplicate email).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Request body failed field validation (blank names, malformed email, short password).
    #[error(transparent)]
    ValidationError(#[from] validator::ValidationErrors),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Password hashing or hash parsing error.
    #[error(transparent)]
    PasswordHashError(#[from] argon2::password_hash::Error),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors choose their own status codes; everything else is logged and reported as a
/// generic 500 Internal Server Error.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::RecipeError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::ValidationError(err) => {
                tracing::debug!("{}", err);

                error_response(StatusCode::BAD_REQUEST, err.to_string())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds an error response with `status` and `message` as the [`ErrorDto`] body.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
