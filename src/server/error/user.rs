use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("A user with this email already exists")]
    EmailTaken,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
