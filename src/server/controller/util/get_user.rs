use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Retrieves user information from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: User found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not
///   found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::warn!(
            "Failed to find user ID {} in database despite having an active session; \
            cleared session for user, they will need to log in again",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}
