//! Tests for the recipe endpoints.
//!
//! `public` covers requests without credentials and `private` requests from a logged in
//! user.

mod private;
mod public;

use recipe_app::server::{
    data::recipe::RecipeRepository,
    route::{detail_url, recipes_url},
    service::recipe::RecipeService,
};
use serde_json::{json, Value};

use super::*;
