//! Database model type aliases.
//!
//! Convenient names for SeaORM entity models used throughout the application, so services
//! and repositories don't import from the generated `entity` crate directly.

/// Type alias for user database model.
///
/// # Fields (from `entity::recipe_user::Model`)
/// - `id` - Primary key
/// - `email` - Unique login email
/// - `name` - Display name
/// - `password_hash` - Argon2 PHC string
/// - `is_active` - Whether the user may log in
/// - `created_at` - Timestamp when the user was created
pub type UserModel = entity::recipe_user::Model;

/// Type alias for recipe database model.
///
/// # Fields (from `entity::recipe::Model`)
/// - `id` - Primary key
/// - `user_id` - Owning user
/// - `title` - Recipe title
/// - `time_minutes` - Preparation time in minutes
/// - `price_cents` - Price in cents
/// - `link` - Optional external link, empty when unset
/// - `created_at` - Timestamp when the recipe was created
pub type RecipeModel = entity::recipe::Model;

/// Type alias for tag database model.
pub type TagModel = entity::tag::Model;

/// Type alias for ingredient database model.
pub type IngredientModel = entity::ingredient::Model;

/// Type alias for recipe to tag membership model.
pub type RecipeTagModel = entity::recipe_tag::Model;

/// Type alias for recipe to ingredient membership model.
pub type RecipeIngredientModel = entity::recipe_ingredient::Model;
