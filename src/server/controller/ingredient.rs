use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        recipe::{CreateNamedDto, IngredientDto},
    },
    server::{
        controller::{recipe::RECIPE_TAG, util::get_user::get_user_from_session},
        error::Error,
        model::app::AppState,
        service::ingredient::IngredientService,
    },
};

/// List ingredients owned by the logged in user, ordered by name descending
#[utoipa::path(
    get,
    path = "/api/recipe/ingredients/",
    tag = RECIPE_TAG,
    responses(
        (status = 200, description = "Ingredients of the logged in user", body = Vec<IngredientDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ingredients(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let ingredients = IngredientService::new(&state.db)
        .list_ingredients(user.id)
        .await?;

    Ok((StatusCode::OK, Json(ingredients)))
}

/// Create an ingredient owned by the logged in user
#[utoipa::path(
    post,
    path = "/api/recipe/ingredients/",
    tag = RECIPE_TAG,
    request_body = CreateNamedDto,
    responses(
        (status = 201, description = "Ingredient created", body = IngredientDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateNamedDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let ingredient = IngredientService::new(&state.db)
        .create_ingredient(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(ingredient)))
}
