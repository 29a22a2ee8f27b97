use tower_sessions::Session;

use crate::server::error::Error;

/// Session key holding the ID of the logged in user.
pub const SESSION_USER_ID_KEY: &str = "recipe:user:id";

/// Typed access to the logged in user's ID stored in a session.
pub struct SessionUserId;

impl SessionUserId {
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session.insert(SESSION_USER_ID_KEY, user_id).await?;

        Ok(())
    }

    /// Get user ID from session
    ///
    /// A value under the key that is not an `i32` fails with `Error::SessionError`.
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        Ok(session.get::<i32>(SESSION_USER_ID_KEY).await?)
    }

    /// Removes the user from the session, returning their ID if one was present
    ///
    /// Only sessions holding a user are cleared; clearing a session that was never stored
    /// makes the session layer fail the response.
    pub async fn take(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = Self::get(session).await?;

        if user_id.is_some() {
            session.clear().await;
        }

        Ok(user_id)
    }
}
