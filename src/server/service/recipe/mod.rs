//! Recipe service layer.
//!
//! Retrieval is always scoped to the requesting user: a recipe owned by somebody else is
//! reported as not found rather than forbidden. The serializers turn recipe models into the
//! list rendering ([`RecipeDto`], related objects by ID) or the detail rendering
//! ([`RecipeDetailDto`], related objects nested).

#[cfg(test)]
mod tests;

use std::collections::{BTreeSet, HashMap};

use sea_orm::{DatabaseConnection, TransactionTrait};
use validator::Validate;

use crate::{
    model::recipe::{CreateRecipeDto, IngredientDto, RecipeDetailDto, RecipeDto, TagDto},
    server::{
        data::{
            ingredient::IngredientRepository,
            recipe::{NewRecipe, RecipeRepository},
            tag::TagRepository,
        },
        error::{recipe::RecipeError, Error},
        model::db::RecipeModel,
        util::price::{price_from_cents, price_to_cents},
    },
};

/// Service for recipe retrieval, creation and serialization.
pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    /// Creates a new instance of [`RecipeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the recipes owned by `user_id`, newest first.
    pub async fn list_recipes(&self, user_id: i32) -> Result<Vec<RecipeDto>, Error> {
        let recipes = RecipeRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        self.serialize_list(recipes).await
    }

    /// Retrieves a single recipe owned by `user_id` in its detail rendering.
    ///
    /// # Returns
    /// - `Ok(RecipeDetailDto)` - Recipe with nested tags & ingredients
    /// - `Err(Error::RecipeError(RecipeError::RecipeNotFound))` - Recipe does not exist or is
    ///   owned by another user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_recipe(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<RecipeDetailDto, Error> {
        let Some(recipe) = RecipeRepository::new(self.db)
            .get_for_user(recipe_id, user_id)
            .await?
        else {
            return Err(RecipeError::RecipeNotFound(recipe_id).into());
        };

        self.serialize_detail(recipe).await
    }

    /// Creates a recipe owned by `user_id` along with its tag & ingredient memberships.
    ///
    /// The recipe row and its memberships are written in a single transaction; nothing is
    /// persisted when any referenced tag or ingredient is missing or owned by another user.
    /// Duplicate IDs in the request are collapsed.
    ///
    /// # Returns
    /// - `Ok(RecipeDetailDto)` - The created recipe
    /// - `Err(Error::ValidationError)` - Blank title or negative preparation time
    /// - `Err(Error::RecipeError(_))` - Invalid price, or referenced tags/ingredients not owned
    ///   by the user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_recipe(
        &self,
        user_id: i32,
        payload: CreateRecipeDto,
    ) -> Result<RecipeDetailDto, Error> {
        payload.validate()?;

        let price_cents = price_to_cents(payload.price)?;

        let tag_ids: BTreeSet<i32> = payload.tags.into_iter().collect();
        let ingredient_ids: BTreeSet<i32> = payload.ingredients.into_iter().collect();

        let txn = self.db.begin().await?;

        let requested: Vec<i32> = tag_ids.iter().copied().collect();
        let owned = TagRepository::new(&txn)
            .get_owned_ids(user_id, &requested)
            .await?;
        let missing = missing_ids(&tag_ids, &owned);
        if !missing.is_empty() {
            return Err(RecipeError::TagsNotOwned(missing).into());
        }

        let requested: Vec<i32> = ingredient_ids.iter().copied().collect();
        let owned = IngredientRepository::new(&txn)
            .get_owned_ids(user_id, &requested)
            .await?;
        let missing = missing_ids(&ingredient_ids, &owned);
        if !missing.is_empty() {
            return Err(RecipeError::IngredientsNotOwned(missing).into());
        }

        let recipe_repository = RecipeRepository::new(&txn);
        let recipe = recipe_repository
            .create(
                user_id,
                NewRecipe {
                    title: payload.title.trim().to_string(),
                    time_minutes: payload.time_minutes,
                    price_cents,
                    link: payload.link.trim().to_string(),
                },
            )
            .await?;

        for tag_id in tag_ids {
            recipe_repository.add_tag(recipe.id, tag_id).await?;
        }
        for ingredient_id in ingredient_ids {
            recipe_repository
                .add_ingredient(recipe.id, ingredient_id)
                .await?;
        }

        txn.commit().await?;

        tracing::debug!(user_id = %user_id, recipe_id = %recipe.id, "Created recipe");

        self.serialize_detail(recipe).await
    }

    /// Renders recipes in list form, preserving the order of `recipes`.
    ///
    /// Related tag & ingredient IDs are loaded with one query each for the whole batch and
    /// listed in ascending order.
    pub async fn serialize_list(
        &self,
        recipes: Vec<RecipeModel>,
    ) -> Result<Vec<RecipeDto>, Error> {
        let recipe_repository = RecipeRepository::new(self.db);
        let recipe_ids: Vec<i32> = recipes.iter().map(|r| r.id).collect();

        let mut tags: HashMap<i32, Vec<i32>> = HashMap::new();
        for membership in recipe_repository.get_tag_memberships(&recipe_ids).await? {
            tags.entry(membership.recipe_id)
                .or_default()
                .push(membership.tag_id);
        }

        let mut ingredients: HashMap<i32, Vec<i32>> = HashMap::new();
        for membership in recipe_repository
            .get_ingredient_memberships(&recipe_ids)
            .await?
        {
            ingredients
                .entry(membership.recipe_id)
                .or_default()
                .push(membership.ingredient_id);
        }

        Ok(recipes
            .into_iter()
            .map(|recipe| RecipeDto {
                id: recipe.id,
                title: recipe.title,
                ingredients: ingredients.remove(&recipe.id).unwrap_or_default(),
                tags: tags.remove(&recipe.id).unwrap_or_default(),
                time_minutes: recipe.time_minutes,
                price: price_from_cents(recipe.price_cents),
                link: recipe.link,
            })
            .collect())
    }

    /// Renders a recipe in detail form with tags & ingredients nested, ordered by ID.
    pub async fn serialize_detail(&self, recipe: RecipeModel) -> Result<RecipeDetailDto, Error> {
        let recipe_repository = RecipeRepository::new(self.db);

        let tags = recipe_repository
            .get_tags(&recipe)
            .await?
            .into_iter()
            .map(|t| TagDto {
                id: t.id,
                name: t.name,
            })
            .collect();

        let ingredients = recipe_repository
            .get_ingredients(&recipe)
            .await?
            .into_iter()
            .map(|i| IngredientDto {
                id: i.id,
                name: i.name,
            })
            .collect();

        Ok(RecipeDetailDto {
            id: recipe.id,
            title: recipe.title,
            ingredients,
            tags,
            time_minutes: recipe.time_minutes,
            price: price_from_cents(recipe.price_cents),
            link: recipe.link,
        })
    }
}

/// IDs in `requested` that are absent from `found`, in ascending order
fn missing_ids(requested: &BTreeSet<i32>, found: &[i32]) -> Vec<i32> {
    let found: BTreeSet<i32> = found.iter().copied().collect();

    requested.difference(&found).copied().collect()
}
