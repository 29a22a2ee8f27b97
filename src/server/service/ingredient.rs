use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::{
    model::recipe::{CreateNamedDto, IngredientDto},
    server::{
        data::ingredient::IngredientRepository,
        error::Error,
    },
};

pub struct IngredientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientService<'a> {
    /// Creates a new instance of [`IngredientService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists ingredients owned by `user_id`, ordered by name descending
    pub async fn list_ingredients(&self, user_id: i32) -> Result<Vec<IngredientDto>, Error> {
        let ingredients = IngredientRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(ingredients
            .into_iter()
            .map(|i| IngredientDto {
                id: i.id,
                name: i.name,
            })
            .collect())
    }

    /// Creates an ingredient owned by `user_id`
    ///
    /// # Returns
    /// - `Ok(IngredientDto)` - The created ingredient
    /// - `Err(Error::ValidationError)` - Name is empty or whitespace
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_ingredient(
        &self,
        user_id: i32,
        payload: CreateNamedDto,
    ) -> Result<IngredientDto, Error> {
        payload.validate()?;
        let name = payload.name.trim();

        let ingredient = IngredientRepository::new(self.db)
            .create(user_id, name)
            .await?;

        Ok(IngredientDto {
            id: ingredient.id,
            name: ingredient.name,
        })
    }
}
