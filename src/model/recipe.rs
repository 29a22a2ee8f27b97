//! Recipe, tag and ingredient DTOs.
//!
//! Recipes have two renderings: [`RecipeDto`] is used by the list endpoint and refers to
//! related tags and ingredients by id, while [`RecipeDetailDto`] nests the related objects.
//! Prices are fixed-point decimals with two places and serialize as strings such as `"5.00"`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IngredientDto {
    pub id: i32,
    pub name: String,
}

/// List rendering of a recipe
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeDto {
    pub id: i32,
    pub title: String,
    /// IDs of the recipe's ingredients in ascending order
    pub ingredients: Vec<i32>,
    /// IDs of the recipe's tags in ascending order
    pub tags: Vec<i32>,
    pub time_minutes: i32,
    #[schema(value_type = String, example = "5.00")]
    pub price: Decimal,
    pub link: String,
}

/// Detail rendering of a recipe with nested tags and ingredients
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeDetailDto {
    pub id: i32,
    pub title: String,
    pub ingredients: Vec<IngredientDto>,
    pub tags: Vec<TagDto>,
    pub time_minutes: i32,
    #[schema(value_type = String, example = "5.00")]
    pub price: Decimal,
    pub link: String,
}

/// Request body for creating a recipe
#[derive(Clone, Debug, Serialize, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateRecipeDto {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(range(min = 0, message = "Preparation time may not be negative"))]
    pub time_minutes: i32,
    #[schema(value_type = String, example = "5.00")]
    pub price: Decimal,
    #[serde(default)]
    pub link: String,
    /// IDs of tags owned by the requesting user
    #[serde(default)]
    pub tags: Vec<i32>,
    /// IDs of ingredients owned by the requesting user
    #[serde(default)]
    pub ingredients: Vec<i32>,
}

/// Request body for creating a tag or an ingredient
#[derive(Clone, Debug, Serialize, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateNamedDto {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

/// Rejects strings that are empty after trimming whitespace.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("may not be blank".into()));
    }

    Ok(())
}
