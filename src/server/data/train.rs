//! Trains.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::train::{TrainPatch, TrainRequest},
    server::model::db::TrainModel,
};

/// Queries on trains, usable on a pool or inside a transaction
pub struct TrainRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainRepository<'a, C> {
    /// Creates a new instance of [`TrainRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a train
    pub async fn create(&self, request: TrainRequest) -> Result<TrainModel, DbErr> {
        let train = entity::train::ActiveModel {
            name: ActiveValue::Set(request.name),
            cargo_num: ActiveValue::Set(request.cargo_num),
            places_in_cargo: ActiveValue::Set(request.places_in_cargo),
            train_type_id: ActiveValue::Set(request.train_type),
            ..Default::default()
        };

        train.insert(self.db).await
    }

    /// Lists trains, restricted to the given train types when `train_type_ids` is set
    pub async fn list(&self, train_type_ids: Option<&[i32]>) -> Result<Vec<TrainModel>, DbErr> {
        let mut query = entity::prelude::Train::find();

        if let Some(ids) = train_type_ids {
            query = query.filter(entity::train::Column::TrainTypeId.is_in(ids.to_vec()));
        }

        query
            .order_by_asc(entity::train::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a train by ID
    pub async fn get(&self, train_id: i32) -> Result<Option<TrainModel>, DbErr> {
        entity::prelude::Train::find_by_id(train_id).one(self.db).await
    }

    /// Trains with the given IDs
    pub async fn get_many(&self, train_ids: &[i32]) -> Result<Vec<TrainModel>, DbErr> {
        entity::prelude::Train::find()
            .filter(entity::train::Column::Id.is_in(train_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Applies the fields present in `patch`
    ///
    /// Returns `None` if the train does not exist.
    pub async fn update(
        &self,
        train_id: i32,
        patch: TrainPatch,
    ) -> Result<Option<TrainModel>, DbErr> {
        let Some(train) = self.get(train_id).await? else {
            return Ok(None);
        };

        let mut train_am = train.into_active_model();
        if let Some(name) = patch.name {
            train_am.name = ActiveValue::Set(name);
        }
        if let Some(cargo_num) = patch.cargo_num {
            train_am.cargo_num = ActiveValue::Set(cargo_num);
        }
        if let Some(places_in_cargo) = patch.places_in_cargo {
            train_am.places_in_cargo = ActiveValue::Set(places_in_cargo);
        }
        if let Some(train_type) = patch.train_type {
            train_am.train_type_id = ActiveValue::Set(train_type);
        }

        Ok(Some(train_am.update(self.db).await?))
    }

    /// Whether any journey uses the train
    pub async fn is_referenced(&self, train_id: i32) -> Result<bool, DbErr> {
        let journeys = entity::prelude::Journey::find()
            .filter(entity::journey::Column::TrainId.eq(train_id))
            .count(self.db)
            .await?;

        Ok(journeys > 0)
    }

    /// Deletes a train
    ///
    /// Returns OK regardless of the train existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, train_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Train::delete_by_id(train_id)
            .exec(self.db)
            .await
    }
}
