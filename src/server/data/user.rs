use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active user
    pub async fn create(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<UserModel, DbErr> {
        let user = entity::recipe_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(name.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::RecipeUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::RecipeUser::find()
            .filter(entity::recipe_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use recipe_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect success when creating a new user
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::RecipeUser)?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository
                .create(TEST_USER_EMAIL, TEST_USER_NAME, "hash")
                .await;

            assert!(result.is_ok());
            let user = result.unwrap();
            assert_eq!(user.email, TEST_USER_EMAIL);
            assert!(user.is_active);

            Ok(())
        }

        /// Expect Error when creating a second user with the same email
        #[tokio::test]
        async fn fails_for_duplicate_email() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::RecipeUser)?;
            test.user().insert_test_user().await?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository
                .create(TEST_USER_EMAIL, TEST_USER_NAME, "hash")
                .await;

            assert!(result.is_err());

            Ok(())
        }

        /// Expect Error when required tables don't exist
        #[tokio::test]
        async fn fails_without_tables() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository
                .create(TEST_USER_EMAIL, TEST_USER_NAME, "hash")
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_email {
        use recipe_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Some for an existing email
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::RecipeUser)?;
            let user_model = test.user().insert_test_user().await?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository.get_by_email(TEST_USER_EMAIL).await?;

            assert_eq!(result.map(|user| user.id), Some(user_model.id));

            Ok(())
        }

        /// Expect None for an unknown email
        #[tokio::test]
        async fn returns_none_for_unknown_email() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::RecipeUser)?;
            test.user().insert_test_user().await?;

            let user_repository = UserRepository::new(&test.state.db);
            let result = user_repository.get_by_email(OTHER_USER_EMAIL).await?;

            assert!(result.is_none());

            Ok(())
        }
    }
}
