//! Stations.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::station::{StationPatch, StationRequest},
    server::model::db::StationModel,
};

/// Queries on stations, usable on a pool or inside a transaction
pub struct StationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StationRepository<'a, C> {
    /// Creates a new instance of [`StationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a station
    pub async fn create(&self, request: StationRequest) -> Result<StationModel, DbErr> {
        let station = entity::station::ActiveModel {
            name: ActiveValue::Set(request.name),
            latitude: ActiveValue::Set(request.latitude),
            longitude: ActiveValue::Set(request.longitude),
            ..Default::default()
        };

        station.insert(self.db).await
    }

    /// Every station, ordered by ID
    pub async fn list(&self) -> Result<Vec<StationModel>, DbErr> {
        entity::prelude::Station::find()
            .order_by_asc(entity::station::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a station by ID
    pub async fn get(&self, station_id: i32) -> Result<Option<StationModel>, DbErr> {
        entity::prelude::Station::find_by_id(station_id)
            .one(self.db)
            .await
    }

    /// Station names keyed by ID, for rendering routes
    pub async fn get_names(&self, station_ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        let stations = entity::prelude::Station::find()
            .filter(entity::station::Column::Id.is_in(station_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(stations
            .into_iter()
            .map(|station| (station.id, station.name))
            .collect())
    }

    /// Applies the fields present in `patch`
    ///
    /// Returns `None` if the station does not exist.
    pub async fn update(
        &self,
        station_id: i32,
        patch: StationPatch,
    ) -> Result<Option<StationModel>, DbErr> {
        let Some(station) = self.get(station_id).await? else {
            return Ok(None);
        };

        let mut station_am = station.into_active_model();
        if let Some(name) = patch.name {
            station_am.name = ActiveValue::Set(name);
        }
        if let Some(latitude) = patch.latitude {
            station_am.latitude = ActiveValue::Set(latitude);
        }
        if let Some(longitude) = patch.longitude {
            station_am.longitude = ActiveValue::Set(longitude);
        }

        Ok(Some(station_am.update(self.db).await?))
    }

    /// Whether any route starts or ends at the station
    pub async fn is_referenced(&self, station_id: i32) -> Result<bool, DbErr> {
        let routes = entity::prelude::Route::find()
            .filter(
                Condition::any()
                    .add(entity::route::Column::SourceId.eq(station_id))
                    .add(entity::route::Column::DestinationId.eq(station_id)),
            )
            .count(self.db)
            .await?;

        Ok(routes > 0)
    }

    /// Deletes a station
    ///
    /// Returns OK regardless of the station existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, station_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Station::delete_by_id(station_id)
            .exec(self.db)
            .await
    }
}
