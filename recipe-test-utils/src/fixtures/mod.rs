//! Test fixture modules for database record creation.
//!
//! - `user` - users with hashed passwords
//! - `recipe` - recipes, tags, ingredients and their memberships

pub mod recipe;
pub mod user;
