use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{
        OTHER_USER_EMAIL, OTHER_USER_PASSWORD, TEST_USER_EMAIL, TEST_USER_NAME, TEST_USER_PASSWORD,
    },
    error::TestError,
    model::UserModel,
    TestSetup,
};

impl TestSetup {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with an argon2 hash of `password`.
    pub async fn insert_user(&self, email: &str, password: &str) -> Result<UserModel, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();

        Ok(
            entity::prelude::RecipeUser::insert(entity::recipe_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                name: ActiveValue::Set(TEST_USER_NAME.to_string()),
                password_hash: ActiveValue::Set(password_hash),
                is_active: ActiveValue::Set(true),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert the user most tests authenticate as.
    pub async fn insert_test_user(&self) -> Result<UserModel, TestError> {
        self.insert_user(TEST_USER_EMAIL, TEST_USER_PASSWORD).await
    }

    /// Insert a second user distinct from [`Self::insert_test_user`].
    pub async fn insert_other_user(&self) -> Result<UserModel, TestError> {
        self.insert_user(OTHER_USER_EMAIL, OTHER_USER_PASSWORD)
            .await
    }
}
