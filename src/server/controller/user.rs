use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, LoginDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Register a new user account
#[utoipa::path(
    post,
    path = "/api/user/create/",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid email, short password or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).create_user(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with email and password
///
/// Stores the user ID in a fresh session ID on success.
#[utoipa::path(
    post,
    path = "/api/user/login/",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db)
        .authenticate(&payload.email, &payload.password)
        .await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    tracing::debug!(user_id = %user.id, "User logged in");

    Ok((StatusCode::OK, Json(user)))
}

/// Log out by clearing the session
#[utoipa::path(
    get,
    path = "/api/user/logout/",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    if let Some(user_id) = SessionUserId::take(&session).await? {
        tracing::debug!(user_id = %user_id, "User logged out");
    }

    Ok(StatusCode::OK)
}

/// Get the logged in user
#[utoipa::path(
    get,
    path = "/api/user/me/",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}
