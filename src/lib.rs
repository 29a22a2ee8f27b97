//! Recipe management API.
//!
//! Users keep their own recipes, tags and ingredients behind a session-authenticated JSON API.
//! The [`server`] module holds the axum application and [`model`] the DTOs exchanged over
//! HTTP.

pub mod model;
pub mod server;
