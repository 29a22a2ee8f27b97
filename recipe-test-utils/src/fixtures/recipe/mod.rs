//! Recipe, tag and ingredient fixtures.
//!
//! Each fixture persists its record immediately and returns the stored model. Relations are
//! attached explicitly with [`RecipeFixtures::add_tag`] and [`RecipeFixtures::add_ingredient`].

pub mod factory;

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{SAMPLE_INGREDIENT_NAME, SAMPLE_TAG_NAME},
    error::TestError,
    fixtures::recipe::factory::{merge_sample_recipe, RecipeOverrides},
    model::{IngredientModel, RecipeIngredientModel, RecipeModel, RecipeTagModel, TagModel},
    TestSetup,
};

impl TestSetup {
    pub fn recipe<'a>(&'a self) -> RecipeFixtures<'a> {
        RecipeFixtures { setup: self }
    }
}

pub struct RecipeFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> RecipeFixtures<'a> {
    /// Insert a tag named "Main course" owned by `user_id`.
    pub async fn sample_tag(&self, user_id: i32) -> Result<TagModel, TestError> {
        self.tag(user_id, SAMPLE_TAG_NAME).await
    }

    pub async fn tag(&self, user_id: i32, name: &str) -> Result<TagModel, TestError> {
        Ok(entity::prelude::Tag::insert(entity::tag::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Insert an ingredient named "Cinnamon" owned by `user_id`.
    pub async fn sample_ingredient(&self, user_id: i32) -> Result<IngredientModel, TestError> {
        self.ingredient(user_id, SAMPLE_INGREDIENT_NAME).await
    }

    pub async fn ingredient(&self, user_id: i32, name: &str) -> Result<IngredientModel, TestError> {
        Ok(
            entity::prelude::Ingredient::insert(entity::ingredient::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a recipe owned by `user_id`, merging `overrides` onto the sample defaults.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the recipe
    /// - `overrides` - Fields to replace; unset fields keep their defaults
    ///
    /// # Returns
    /// - `Ok(RecipeModel)` - The persisted recipe
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. the owner does not exist
    pub async fn sample_recipe(
        &self,
        user_id: i32,
        overrides: RecipeOverrides,
    ) -> Result<RecipeModel, TestError> {
        let sample = merge_sample_recipe(overrides)?;

        Ok(
            entity::prelude::Recipe::insert(entity::recipe::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                title: ActiveValue::Set(sample.title),
                time_minutes: ActiveValue::Set(sample.time_minutes),
                price_cents: ActiveValue::Set(sample.price_cents),
                link: ActiveValue::Set(sample.link),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn add_tag(
        &self,
        recipe_id: i32,
        tag_id: i32,
    ) -> Result<RecipeTagModel, TestError> {
        entity::prelude::RecipeTag::insert(entity::recipe_tag::ActiveModel {
            recipe_id: ActiveValue::Set(recipe_id),
            tag_id: ActiveValue::Set(tag_id),
        })
        .exec(&self.setup.state.db)
        .await?;

        Ok(RecipeTagModel { recipe_id, tag_id })
    }

    pub async fn add_ingredient(
        &self,
        recipe_id: i32,
        ingredient_id: i32,
    ) -> Result<RecipeIngredientModel, TestError> {
        entity::prelude::RecipeIngredient::insert(entity::recipe_ingredient::ActiveModel {
            recipe_id: ActiveValue::Set(recipe_id),
            ingredient_id: ActiveValue::Set(ingredient_id),
        })
        .exec(&self.setup.state.db)
        .await?;

        Ok(RecipeIngredientModel {
            recipe_id,
            ingredient_id,
        })
    }
}
