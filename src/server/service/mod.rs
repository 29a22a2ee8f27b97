//! Service layer for business logic.
//!
//! Services validate input, coordinate repositories (inside a transaction where a request
//! writes more than one row) and convert database models into the DTOs returned by the API.
//! Every service method is scoped to the requesting user.

pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
