//! Routes between two stations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::route::{RoutePatch, RouteRequest},
    server::model::db::RouteModel,
};

/// Queries on routes, usable on a pool or inside a transaction
pub struct RouteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RouteRepository<'a, C> {
    /// Creates a new instance of [`RouteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a route
    pub async fn create(&self, request: RouteRequest) -> Result<RouteModel, DbErr> {
        let route = entity::route::ActiveModel {
            source_id: ActiveValue::Set(request.source),
            destination_id: ActiveValue::Set(request.destination),
            distance: ActiveValue::Set(request.distance),
            ..Default::default()
        };

        route.insert(self.db).await
    }

    /// Every route, ordered by ID
    pub async fn list(&self) -> Result<Vec<RouteModel>, DbErr> {
        entity::prelude::Route::find()
            .order_by_asc(entity::route::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a route by ID
    pub async fn get(&self, route_id: i32) -> Result<Option<RouteModel>, DbErr> {
        entity::prelude::Route::find_by_id(route_id).one(self.db).await
    }

    /// Routes with the given IDs
    pub async fn get_many(&self, route_ids: &[i32]) -> Result<Vec<RouteModel>, DbErr> {
        entity::prelude::Route::find()
            .filter(entity::route::Column::Id.is_in(route_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Applies the fields present in `patch`
    ///
    /// Returns `None` if the route does not exist.
    pub async fn update(
        &self,
        route_id: i32,
        patch: RoutePatch,
    ) -> Result<Option<RouteModel>, DbErr> {
        let Some(route) = self.get(route_id).await? else {
            return Ok(None);
        };

        let mut route_am = route.into_active_model();
        if let Some(source) = patch.source {
            route_am.source_id = ActiveValue::Set(source);
        }
        if let Some(destination) = patch.destination {
            route_am.destination_id = ActiveValue::Set(destination);
        }
        if let Some(distance) = patch.distance {
            route_am.distance = ActiveValue::Set(distance);
        }

        Ok(Some(route_am.update(self.db).await?))
    }

    /// Whether any journey runs along the route
    pub async fn is_referenced(&self, route_id: i32) -> Result<bool, DbErr> {
        let journeys = entity::prelude::Journey::find()
            .filter(entity::journey::Column::RouteId.eq(route_id))
            .count(self.db)
            .await?;

        Ok(journeys > 0)
    }

    /// Deletes a route
    ///
    /// Returns OK regardless of the route existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, route_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Route::delete_by_id(route_id)
            .exec(self.db)
            .await
    }
}
