//! Registered users.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::db::UserModel;

/// Queries on users, usable on a pool or inside a transaction
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(&self, email: &str, password_hash: String) -> Result<UserModel, DbErr> {
        let user = entity::railway_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Finds a user by ID
    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::RailwayUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Finds a user by exact email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::RailwayUser::find()
            .filter(entity::railway_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
