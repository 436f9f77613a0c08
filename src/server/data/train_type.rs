//! Train types.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::train::{TrainTypePatch, TrainTypeRequest},
    server::model::db::TrainTypeModel,
};

/// Queries on train types, usable on a pool or inside a transaction
pub struct TrainTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainTypeRepository<'a, C> {
    /// Creates a new instance of [`TrainTypeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a train type
    pub async fn create(&self, request: TrainTypeRequest) -> Result<TrainTypeModel, DbErr> {
        let train_type = entity::train_type::ActiveModel {
            name: ActiveValue::Set(request.name),
            ..Default::default()
        };

        train_type.insert(self.db).await
    }

    /// Every train type, ordered by ID
    pub async fn list(&self) -> Result<Vec<TrainTypeModel>, DbErr> {
        entity::prelude::TrainType::find()
            .order_by_asc(entity::train_type::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a train type by ID
    pub async fn get(&self, train_type_id: i32) -> Result<Option<TrainTypeModel>, DbErr> {
        entity::prelude::TrainType::find_by_id(train_type_id)
            .one(self.db)
            .await
    }

    /// Train type names keyed by ID
    pub async fn get_names(
        &self,
        train_type_ids: &[i32],
    ) -> Result<HashMap<i32, String>, DbErr> {
        let train_types = entity::prelude::TrainType::find()
            .filter(entity::train_type::Column::Id.is_in(train_type_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(train_types
            .into_iter()
            .map(|train_type| (train_type.id, train_type.name))
            .collect())
    }

    /// Returns the IDs in `train_type_ids` with no matching row, in the order given
    pub async fn find_missing(&self, train_type_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        let existing = self.get_names(train_type_ids).await?;

        Ok(train_type_ids
            .iter()
            .copied()
            .filter(|id| !existing.contains_key(id))
            .collect())
    }

    /// Applies the fields present in `patch`
    ///
    /// Returns `None` if the train type does not exist.
    pub async fn update(
        &self,
        train_type_id: i32,
        patch: TrainTypePatch,
    ) -> Result<Option<TrainTypeModel>, DbErr> {
        let Some(train_type) = self.get(train_type_id).await? else {
            return Ok(None);
        };

        let mut train_type_am = train_type.into_active_model();
        if let Some(name) = patch.name {
            train_type_am.name = ActiveValue::Set(name);
        }

        Ok(Some(train_type_am.update(self.db).await?))
    }

    /// Whether any train is of this type
    pub async fn is_referenced(&self, train_type_id: i32) -> Result<bool, DbErr> {
        let trains = entity::prelude::Train::find()
            .filter(entity::train::Column::TrainTypeId.eq(train_type_id))
            .count(self.db)
            .await?;

        Ok(trains > 0)
    }

    /// Deletes a train type
    ///
    /// Returns OK regardless of the train type existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, train_type_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TrainType::delete_by_id(train_type_id)
            .exec(self.db)
            .await
    }
}
