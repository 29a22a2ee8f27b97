use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
}

/// Request body for creating a user account
#[derive(Clone, Debug, Serialize, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateUserDto {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 5, message = "Password must be at least 5 characters long"))]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

/// Request body for logging in with email and password
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}
