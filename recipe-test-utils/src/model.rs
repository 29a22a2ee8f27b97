//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main recipe-app crate so fixtures and tests refer to
//! the same names.

/// Type alias for user database model.
pub type UserModel = entity::recipe_user::Model;

/// Type alias for recipe database model.
pub type RecipeModel = entity::recipe::Model;

/// Type alias for tag database model.
pub type TagModel = entity::tag::Model;

/// Type alias for ingredient database model.
pub type IngredientModel = entity::ingredient::Model;

/// Type alias for recipe to tag membership model.
pub type RecipeTagModel = entity::recipe_tag::Model;

/// Type alias for recipe to ingredient membership model.
pub type RecipeIngredientModel = entity::recipe_ingredient::Model;
