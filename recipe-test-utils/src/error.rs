use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error(transparent)]
    PasswordHashError(#[from] argon2::password_hash::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid fixture value: {0}")]
    InvalidFixture(String),
}
