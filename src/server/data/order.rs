//! Orders, always looked up through their owner.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::OrderModel;

/// Queries on orders, usable on a pool or inside a transaction
pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new instance of [`OrderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an empty order owned by `user_id`, stamped with the current time
    pub async fn create(&self, user_id: i32) -> Result<OrderModel, DbErr> {
        let order = entity::order::ActiveModel {
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        order.insert(self.db).await
    }

    /// Orders of a user, newest first
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<OrderModel>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the order only if it belongs to `user_id`
    pub async fn get_for_user(
        &self,
        order_id: i32,
        user_id: i32,
    ) -> Result<Option<OrderModel>, DbErr> {
        entity::prelude::Order::find_by_id(order_id)
            .filter(entity::order::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Deletes the order and its tickets if it belongs to `user_id`
    ///
    /// Returns OK regardless of the order existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete_for_user(
        &self,
        order_id: i32,
        user_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Order::delete_many()
            .filter(entity::order::Column::Id.eq(order_id))
            .filter(entity::order::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod list_for_user {
        use railway_test_utils::prelude::*;

        use crate::server::data::order::OrderRepository;

        /// Expect only the user's orders, newest first
        #[tokio::test]
        async fn lists_own_orders_newest_first() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let rider = test.user().insert_user(TEST_EMAIL).await?;
            let other = test.user().insert_user("other@example.com").await?;

            let order_repo = OrderRepository::new(&test.db);
            let older = order_repo.create(rider.id).await?;
            let newer = order_repo.create(rider.id).await?;
            order_repo.create(other.id).await?;

            let orders = order_repo.list_for_user(rider.id).await?;

            assert_eq!(
                orders.iter().map(|o| o.id).collect::<Vec<_>>(),
                vec![newer.id, older.id]
            );

            Ok(())
        }
    }

    mod get_for_user {
        use railway_test_utils::prelude::*;

        use crate::server::data::order::OrderRepository;

        /// Expect Ok(None) when the order belongs to someone else
        #[tokio::test]
        async fn hides_other_users_order() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let rider = test.user().insert_user(TEST_EMAIL).await?;
            let other = test.user().insert_user("other@example.com").await?;
            let order = test.booking().insert_order(other.id).await?;

            let order_repo = OrderRepository::new(&test.db);

            assert!(order_repo.get_for_user(order.id, rider.id).await?.is_none());
            assert!(order_repo.get_for_user(order.id, other.id).await?.is_some());

            Ok(())
        }
    }

    mod delete_for_user {
        use railway_test_utils::prelude::*;
        use sea_orm::{EntityTrait, PaginatorTrait};

        use crate::server::data::order::OrderRepository;

        /// Expect tickets to be deleted with their order
        #[tokio::test]
        async fn cascades_to_tickets() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let rider = test.user().insert_user(TEST_EMAIL).await?;
            let booked = test.booking().insert_booked_journey(2, 10).await?;
            let order = test.booking().insert_order(rider.id).await?;
            test.booking()
                .insert_ticket(order.id, booked.journey.id, 1, 1)
                .await?;

            let order_repo = OrderRepository::new(&test.db);
            let result = order_repo.delete_for_user(order.id, rider.id).await?;

            assert_eq!(result.rows_affected, 1);
            assert_eq!(entity::prelude::Ticket::find().count(&test.db).await?, 0);

            Ok(())
        }

        /// Expect nothing to be deleted for another user
        #[tokio::test]
        async fn ignores_other_users_order() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let rider = test.user().insert_user(TEST_EMAIL).await?;
            let other = test.user().insert_user("other@example.com").await?;
            let order = test.booking().insert_order(other.id).await?;

            let order_repo = OrderRepository::new(&test.db);
            let result = order_repo.delete_for_user(order.id, rider.id).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }
}
