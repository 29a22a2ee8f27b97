//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per entity. Each is generic over [`sea_orm::ConnectionTrait`]
//! so the same repository runs against a pooled connection or inside a transaction.

pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
