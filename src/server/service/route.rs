//! Route management.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::route::{RouteDto, RoutePatch, RouteReadDto, RouteRequest},
    server::{
        data::{route::RouteRepository, station::StationRepository},
        error::{conflict::ConflictError, validation::ValidationError, Error},
        model::db::RouteModel,
        projection::format,
    },
};

const RESOURCE: &str = "route";

/// Validation and persistence rules for routes
pub struct RouteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RouteService<'a> {
    /// Creates a new instance of [`RouteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists routes
    pub async fn list(&self) -> Result<Vec<RouteReadDto>, Error> {
        let routes = RouteRepository::new(self.db).list().await?;

        self.read(routes).await
    }

    /// Retrieves a route, or `Error::NotFound`
    pub async fn get(&self, route_id: i32) -> Result<RouteReadDto, Error> {
        let Some(route) = RouteRepository::new(self.db).get(route_id).await? else {
            return Err(Error::not_found(RESOURCE, route_id));
        };

        let mut routes = self.read(vec![route]).await?;

        routes
            .pop()
            .ok_or_else(|| Error::InternalError(format!("route {} vanished while reading", route_id)))
    }

    /// Validates and stores a new route
    pub async fn create(&self, request: RouteRequest) -> Result<RouteDto, Error> {
        self.validate_stations(Some(request.source), Some(request.destination))
            .await?;

        let route = RouteRepository::new(self.db).create(request).await?;

        Ok(write(route))
    }

    /// Applies a full (`PUT`) or partial (`PATCH`) update
    pub async fn update(&self, route_id: i32, patch: RoutePatch) -> Result<RouteDto, Error> {
        self.validate_stations(patch.source, patch.destination)
            .await?;

        RouteRepository::new(self.db)
            .update(route_id, patch)
            .await?
            .map(write)
            .ok_or_else(|| Error::not_found(RESOURCE, route_id))
    }

    /// Deletes a route no journey runs along
    pub async fn delete(&self, route_id: i32) -> Result<(), Error> {
        let route_repo = RouteRepository::new(self.db);

        if route_repo.get(route_id).await?.is_none() {
            return Err(Error::not_found(RESOURCE, route_id));
        }

        if route_repo.is_referenced(route_id).await? {
            return Err(ConflictError::InUse {
                resource: RESOURCE,
                id: route_id,
            }
            .into());
        }

        route_repo.delete(route_id).await?;

        Ok(())
    }

    async fn validate_stations(
        &self,
        source: Option<i32>,
        destination: Option<i32>,
    ) -> Result<(), Error> {
        let station_repo = StationRepository::new(self.db);

        for (field, station_id) in [("source", source), ("destination", destination)] {
            let Some(station_id) = station_id else {
                continue;
            };

            if station_repo.get(station_id).await?.is_none() {
                return Err(ValidationError::UnknownReference {
                    field,
                    id: station_id,
                }
                .into());
            }
        }

        Ok(())
    }

    async fn read(&self, routes: Vec<RouteModel>) -> Result<Vec<RouteReadDto>, Error> {
        let station_ids: Vec<i32> = routes
            .iter()
            .flat_map(|route| [route.source_id, route.destination_id])
            .collect();
        let stations: HashMap<i32, String> = StationRepository::new(self.db)
            .get_names(&station_ids)
            .await?;

        let name = |station_id: i32| {
            stations.get(&station_id).cloned().ok_or_else(|| {
                Error::InternalError(format!("station {} missing for route", station_id))
            })
        };

        routes
            .into_iter()
            .map(|route| {
                Ok(RouteReadDto {
                    id: route.id,
                    source: name(route.source_id)?,
                    destination: name(route.destination_id)?,
                    distance: format::distance(route.distance),
                })
            })
            .collect()
    }
}

fn write(route: RouteModel) -> RouteDto {
    RouteDto {
        id: route.id,
        source: route.source_id,
        destination: route.destination_id,
        distance: route.distance,
    }
}
