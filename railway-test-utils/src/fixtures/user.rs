use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_PASSWORD, TEST_PASSWORD_HASH_COST},
    error::TestError,
    model::UserModel,
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { test: self }
    }
}

pub struct UserFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose password is [`TEST_PASSWORD`].
    pub async fn insert_user(&self, email: &str) -> Result<UserModel, TestError> {
        let password_hash = bcrypt::hash(TEST_PASSWORD, TEST_PASSWORD_HASH_COST)?;

        Ok(
            entity::prelude::RailwayUser::insert(entity::railway_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(password_hash),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
