use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::db::TagModel;

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    /// Creates a new instance of [`TagRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, name: &str) -> Result<TagModel, DbErr> {
        let tag = entity::tag::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        tag.insert(self.db).await
    }

    /// Gets all tags owned by `user_id`, ordered by name descending
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<TagModel>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::UserId.eq(user_id))
            .order_by_desc(entity::tag::Column::Name)
            .all(self.db)
            .await
    }

    /// Filters `tag_ids` down to the IDs that exist and are owned by `user_id`
    pub async fn get_owned_ids(
        &self,
        user_id: i32,
        tag_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Tag::find()
            .select_only()
            .column(entity::tag::Column::Id)
            .filter(entity::tag::Column::UserId.eq(user_id))
            .filter(entity::tag::Column::Id.is_in(tag_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
