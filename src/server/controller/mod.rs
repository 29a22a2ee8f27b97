//! HTTP controller endpoints for the recipe API.
//!
//! Axum handlers for user accounts, recipes, tags and ingredients. Controllers resolve the
//! requesting user from the session, delegate to services and map results to responses.
//! Each handler carries a utoipa path annotation used to build the OpenAPI document.

pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
pub mod util;
