use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::{
    IngredientModel, RecipeIngredientModel, RecipeModel, RecipeTagModel, TagModel,
};

/// Scalar fields of a recipe to be inserted.
#[derive(Clone, Debug)]
pub struct NewRecipe {
    pub title: String,
    pub time_minutes: i32,
    pub price_cents: i64,
    pub link: String,
}

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    /// Creates a new instance of [`RecipeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, recipe: NewRecipe) -> Result<RecipeModel, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(recipe.title),
            time_minutes: ActiveValue::Set(recipe.time_minutes),
            price_cents: ActiveValue::Set(recipe.price_cents),
            link: ActiveValue::Set(recipe.link),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        recipe.insert(self.db).await
    }

    /// Gets every stored recipe regardless of owner, newest ID first
    pub async fn get_all(&self) -> Result<Vec<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find()
            .order_by_desc(entity::recipe::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets recipes owned by `user_id`, newest ID first
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::UserId.eq(user_id))
            .order_by_desc(entity::recipe::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a recipe only if it is owned by `user_id`
    pub async fn get_for_user(
        &self,
        recipe_id: i32,
        user_id: i32,
    ) -> Result<Option<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find_by_id(recipe_id)
            .filter(entity::recipe::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Adds `tag_id` to the recipe's tags
    ///
    /// Returns `false` without writing when the membership already exists.
    pub async fn add_tag(&self, recipe_id: i32, tag_id: i32) -> Result<bool, DbErr> {
        if entity::prelude::RecipeTag::find_by_id((recipe_id, tag_id))
            .one(self.db)
            .await?
            .is_some()
        {
            return Ok(false);
        }

        entity::prelude::RecipeTag::insert(entity::recipe_tag::ActiveModel {
            recipe_id: ActiveValue::Set(recipe_id),
            tag_id: ActiveValue::Set(tag_id),
        })
        .exec(self.db)
        .await?;

        Ok(true)
    }

    /// Adds `ingredient_id` to the recipe's ingredients
    ///
    /// Returns `false` without writing when the membership already exists.
    pub async fn add_ingredient(&self, recipe_id: i32, ingredient_id: i32) -> Result<bool, DbErr> {
        if entity::prelude::RecipeIngredient::find_by_id((recipe_id, ingredient_id))
            .one(self.db)
            .await?
            .is_some()
        {
            return Ok(false);
        }

        entity::prelude::RecipeIngredient::insert(entity::recipe_ingredient::ActiveModel {
            recipe_id: ActiveValue::Set(recipe_id),
            ingredient_id: ActiveValue::Set(ingredient_id),
        })
        .exec(self.db)
        .await?;

        Ok(true)
    }

    /// Gets tag memberships of the given recipes, ordered by recipe then tag ID
    pub async fn get_tag_memberships(
        &self,
        recipe_ids: &[i32],
    ) -> Result<Vec<RecipeTagModel>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RecipeTag::find()
            .filter(entity::recipe_tag::Column::RecipeId.is_in(recipe_ids.iter().copied()))
            .order_by_asc(entity::recipe_tag::Column::RecipeId)
            .order_by_asc(entity::recipe_tag::Column::TagId)
            .all(self.db)
            .await
    }

    /// Gets ingredient memberships of the given recipes, ordered by recipe then ingredient ID
    pub async fn get_ingredient_memberships(
        &self,
        recipe_ids: &[i32],
    ) -> Result<Vec<RecipeIngredientModel>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RecipeIngredient::find()
            .filter(entity::recipe_ingredient::Column::RecipeId.is_in(recipe_ids.iter().copied()))
            .order_by_asc(entity::recipe_ingredient::Column::RecipeId)
            .order_by_asc(entity::recipe_ingredient::Column::IngredientId)
            .all(self.db)
            .await
    }

    pub async fn get_tags(&self, recipe: &RecipeModel) -> Result<Vec<TagModel>, DbErr> {
        recipe
            .find_related(entity::prelude::Tag)
            .order_by_asc(entity::tag::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_ingredients(
        &self,
        recipe: &RecipeModel,
    ) -> Result<Vec<IngredientModel>, DbErr> {
        recipe
            .find_related(entity::prelude::Ingredient)
            .order_by_asc(entity::ingredient::Column::Id)
            .all(self.db)
            .await
    }
}
