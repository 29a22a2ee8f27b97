use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::{
    model::recipe::{CreateNamedDto, TagDto},
    server::{data::tag::TagRepository, error::Error},
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    /// Creates a new instance of [`TagService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists tags owned by `user_id`, ordered by name descending
    pub async fn list_tags(&self, user_id: i32) -> Result<Vec<TagDto>, Error> {
        let tags = TagRepository::new(self.db).get_by_user_id(user_id).await?;

        Ok(tags
            .into_iter()
            .map(|t| TagDto {
                id: t.id,
                name: t.name,
            })
            .collect())
    }

    /// Creates a tag owned by `user_id`
    ///
    /// # Returns
    /// - `Ok(TagDto)` - The created tag
    /// - `Err(Error::ValidationError)` - Name is empty or whitespace
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_tag(
        &self,
        user_id: i32,
        payload: CreateNamedDto,
    ) -> Result<TagDto, Error> {
        payload.validate()?;
        let name = payload.name.trim();

        let tag = TagRepository::new(self.db).create(user_id, name).await?;

        Ok(TagDto {
            id: tag.id,
            name: tag.name,
        })
    }
}
