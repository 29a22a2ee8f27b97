//! User account service.
//!
//! Handles registration, credential checks for login and lookups of the user held in a
//! session.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, user::UserError, Error},
        model::db::UserModel,
        util::password::{hash_password, verify_password},
    },
};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user with a hashed password.
    ///
    /// The domain part of the email is lowercased before it is stored or compared.
    ///
    /// # Arguments
    /// - `payload` - Email, plain text password and optional display name
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::ValidationError)` - Email is malformed or password below 5 characters
    /// - `Err(Error::UserError(UserError::EmailTaken))` - Another user already has this email
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, payload: CreateUserDto) -> Result<UserDto, Error> {
        payload.validate()?;

        let email = normalize_email(&payload.email);

        let user_repository = UserRepository::new(self.db);

        if user_repository.get_by_email(&email).await?.is_some() {
            return Err(UserError::EmailTaken.into());
        }

        let password_hash = hash_password(&payload.password)?;
        let user = user_repository
            .create(&email, payload.name.trim(), &password_hash)
            .await?;

        tracing::info!(user_id = %user.id, "Created user");

        Ok(user_to_dto(user))
    }

    /// Checks login credentials.
    ///
    /// Unknown emails, wrong passwords and inactive accounts all fail with the same error so
    /// callers can't tell which one occurred.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Credentials are valid
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Credentials rejected
    /// - `Err(Error)` - Database or password hash errors
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<UserDto, Error> {
        let email = normalize_email(email);

        let Some(user) = UserRepository::new(self.db).get_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !user.is_active || !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user_to_dto(user))
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get(user_id).await?;

        Ok(user.map(user_to_dto))
    }
}

fn user_to_dto(user: UserModel) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email,
        name: user.name,
    }
}

/// Lowercases the domain part of an email address, leaving the local part untouched.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();

    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}
