use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum RecipeError {
    /// Recipe does not exist or is owned by another user
    #[error("Recipe ID {0} not found for the requesting user")]
    RecipeNotFound(i32),
    #[error("Tag IDs {0:?} do not exist or are not owned by the requesting user")]
    TagsNotOwned(Vec<i32>),
    #[error("Ingredient IDs {0:?} do not exist or are not owned by the requesting user")]
    IngredientsNotOwned(Vec<i32>),
    #[error("Invalid price {0}: expected a non-negative amount below 1000 with at most 2 decimal places")]
    InvalidPrice(String),
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        match self {
            Self::RecipeNotFound(recipe_id) => {
                tracing::debug!(recipe_id = %recipe_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, "Not found.")
            }
            err => {
                tracing::debug!("{}", err);

                error_response(StatusCode::BAD_REQUEST, err.to_string())
            }
        }
    }
}
