use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        recipe::{CreateNamedDto, TagDto},
    },
    server::{
        controller::{recipe::RECIPE_TAG, util::get_user::get_user_from_session},
        error::Error,
        model::app::AppState,
        service::tag::TagService,
    },
};

/// List tags owned by the logged in user, ordered by name descending
#[utoipa::path(
    get,
    path = "/api/recipe/tags/",
    tag = RECIPE_TAG,
    responses(
        (status = 200, description = "Tags of the logged in user", body = Vec<TagDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tags(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let tags = TagService::new(&state.db).list_tags(user.id).await?;

    Ok((StatusCode::OK, Json(tags)))
}

/// Create a tag owned by the logged in user
#[utoipa::path(
    post,
    path = "/api/recipe/tags/",
    tag = RECIPE_TAG,
    request_body = CreateNamedDto,
    responses(
        (status = 201, description = "Tag created", body = TagDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tag(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateNamedDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let tag = TagService::new(&state.db)
        .create_tag(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(tag)))
}
