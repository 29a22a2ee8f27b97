use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::db::IngredientModel;

pub struct IngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IngredientRepository<'a, C> {
    /// Creates a new instance of [`IngredientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, name: &str) -> Result<IngredientModel, DbErr> {
        let ingredient = entity::ingredient::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        ingredient.insert(self.db).await
    }

    /// Gets all ingredients owned by `user_id`, ordered by name descending
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<IngredientModel>, DbErr> {
        entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::UserId.eq(user_id))
            .order_by_desc(entity::ingredient::Column::Name)
            .all(self.db)
            .await
    }

    /// Filters `ingredient_ids` down to the IDs that exist and are owned by `user_id`
    pub async fn get_owned_ids(
        &self,
        user_id: i32,
        ingredient_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Ingredient::find()
            .select_only()
            .column(entity::ingredient::Column::Id)
            .filter(entity::ingredient::Column::UserId.eq(user_id))
            .filter(entity::ingredient::Column::Id.is_in(ingredient_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
