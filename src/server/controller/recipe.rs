use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        recipe::{CreateRecipeDto, RecipeDetailDto, RecipeDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::recipe::RecipeService,
    },
};

pub static RECIPE_TAG: &str = "recipe";

/// List recipes owned by the logged in user, newest first
#[utoipa::path(
    get,
    path = "/api/recipe/recipes/",
    tag = RECIPE_TAG,
    responses(
        (status = 200, description = "Recipes of the logged in user", body = Vec<RecipeDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let recipes = RecipeService::new(&state.db).list_recipes(user.id).await?;

    Ok((StatusCode::OK, Json(recipes)))
}

/// Create a recipe owned by the logged in user
#[utoipa::path(
    post,
    path = "/api/recipe/recipes/",
    tag = RECIPE_TAG,
    request_body = CreateRecipeDto,
    responses(
        (status = 201, description = "Recipe created", body = RecipeDetailDto),
        (status = 400, description = "Invalid fields or tags/ingredients not owned by the user", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRecipeDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let recipe = RecipeService::new(&state.db)
        .create_recipe(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Get a recipe owned by the logged in user
#[utoipa::path(
    get,
    path = "/api/recipe/recipes/{id}/",
    tag = RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe with nested tags and ingredients", body = RecipeDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found or owned by another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let recipe = RecipeService::new(&state.db)
        .get_recipe(user.id, recipe_id)
        .await?;

    Ok((StatusCode::OK, Json(recipe)))
}
