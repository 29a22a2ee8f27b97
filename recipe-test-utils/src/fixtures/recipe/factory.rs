//! Default + override merging for sample recipes.
//!
//! A test describes only the fields it cares about through [`RecipeOverrides`]; every field
//! left unset falls back to the sample defaults in [`crate::constant`].

use rust_decimal::{prelude::ToPrimitive, Decimal};

use crate::{
    constant::{
        SAMPLE_RECIPE_LINK, SAMPLE_RECIPE_PRICE_CENTS, SAMPLE_RECIPE_TIME_MINUTES,
        SAMPLE_RECIPE_TITLE,
    },
    error::TestError,
};

/// Optional named overrides for a sample recipe.
///
/// # Example
/// ```ignore
/// let recipe = test
///     .recipe()
///     .sample_recipe(user.id, RecipeOverrides::default().title("Chocolate cake"))
///     .await?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecipeOverrides {
    pub title: Option<String>,
    pub time_minutes: Option<i32>,
    pub price: Option<Decimal>,
    pub link: Option<String>,
}

impl RecipeOverrides {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn time_minutes(mut self, time_minutes: i32) -> Self {
        self.time_minutes = Some(time_minutes);
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Field values of a sample recipe after overrides have been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleRecipe {
    pub title: String,
    pub time_minutes: i32,
    pub price_cents: i64,
    pub link: String,
}

/// Merge `overrides` onto the sample defaults; an override wins on collision.
///
/// # Returns
/// - `Ok(SampleRecipe)` - Resolved field values
/// - `Err(TestError::InvalidFixture)` - Price override does not fit in cents
pub fn merge_sample_recipe(overrides: RecipeOverrides) -> Result<SampleRecipe, TestError> {
    let price_cents = match overrides.price {
        Some(price) => price
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.round().to_i64())
            .ok_or_else(|| TestError::InvalidFixture(format!("price {} out of range", price)))?,
        None => SAMPLE_RECIPE_PRICE_CENTS,
    };

    Ok(SampleRecipe {
        title: overrides
            .title
            .unwrap_or_else(|| SAMPLE_RECIPE_TITLE.to_string()),
        time_minutes: overrides.time_minutes.unwrap_or(SAMPLE_RECIPE_TIME_MINUTES),
        price_cents,
        link: overrides
            .link
            .unwrap_or_else(|| SAMPLE_RECIPE_LINK.to_string()),
    })
}
