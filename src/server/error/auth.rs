use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Failed to login user due to invalid email or password")]
    InvalidCredentials,
}

impl AuthError {
    fn not_authenticated() -> Response {
        error_response(
            StatusCode::UNAUTHORIZED,
            "Authentication credentials were not provided.",
        )
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", Self::UserNotInSession);

                Self::not_authenticated()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Self::not_authenticated()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::BAD_REQUEST,
                    "Unable to authenticate with provided credentials",
                )
            }
        }
    }
}
