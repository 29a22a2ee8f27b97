//! Standard fixture values shared across tests.
//!
//! Credentials here are placeholders for test users only. The sample values mirror the
//! defaults applied by the recipe, tag and ingredient fixtures when a test does not
//! override them.

/// Email of the user most tests authenticate as.
pub static TEST_USER_EMAIL: &str = "test@test.com";

/// Password of the user most tests authenticate as.
pub static TEST_USER_PASSWORD: &str = "testpass";

/// Email of a second user, used to verify per-user scoping.
pub static OTHER_USER_EMAIL: &str = "other@test.com";

/// Password of the second user.
pub static OTHER_USER_PASSWORD: &str = "password123";

/// Display name given to users created by fixtures.
pub static TEST_USER_NAME: &str = "Test User";

/// Default title of a sample recipe.
pub static SAMPLE_RECIPE_TITLE: &str = "Sample recipe";

/// Default preparation time of a sample recipe, in minutes.
pub const SAMPLE_RECIPE_TIME_MINUTES: i32 = 10;

/// Default price of a sample recipe in cents (5.00).
pub const SAMPLE_RECIPE_PRICE_CENTS: i64 = 500;

/// Default link of a sample recipe.
pub static SAMPLE_RECIPE_LINK: &str = "";

/// Default name of a sample tag.
pub static SAMPLE_TAG_NAME: &str = "Main course";

/// Default name of a sample ingredient.
pub static SAMPLE_INGREDIENT_NAME: &str = "Cinnamon";
