//! Station management.

use sea_orm::DatabaseConnection;

use crate::{
    model::station::{StationDetailDto, StationListDto, StationPatch, StationRequest},
    server::{
        data::station::StationRepository,
        error::{conflict::ConflictError, validation::ValidationError, Error},
        model::db::StationModel,
    },
};

const RESOURCE: &str = "station";

/// Validation and persistence rules for stations
pub struct StationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StationService<'a> {
    /// Creates a new instance of [`StationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists stations
    pub async fn list(&self) -> Result<Vec<StationListDto>, Error> {
        let stations = StationRepository::new(self.db).list().await?;

        Ok(stations
            .into_iter()
            .map(|station| StationListDto {
                id: station.id,
                name: station.name,
            })
            .collect())
    }

    /// Retrieves a station, or `Error::NotFound`
    pub async fn get(&self, station_id: i32) -> Result<StationDetailDto, Error> {
        StationRepository::new(self.db)
            .get(station_id)
            .await?
            .map(detail)
            .ok_or_else(|| Error::not_found(RESOURCE, station_id))
    }

    /// Validates and stores a new station
    pub async fn create(&self, request: StationRequest) -> Result<StationDetailDto, Error> {
        validate_name(Some(&request.name))?;

        let station = StationRepository::new(self.db)
            .create(request)
            .await
            .map_err(|err| duplicate_name().on_unique_violation(err))?;

        Ok(detail(station))
    }

    /// Applies a full (`PUT`) or partial (`PATCH`) update
    pub async fn update(
        &self,
        station_id: i32,
        patch: StationPatch,
    ) -> Result<StationDetailDto, Error> {
        validate_name(patch.name.as_deref())?;

        StationRepository::new(self.db)
            .update(station_id, patch)
            .await
            .map_err(|err| duplicate_name().on_unique_violation(err))?
            .map(detail)
            .ok_or_else(|| Error::not_found(RESOURCE, station_id))
    }

    /// Deletes a station no route refers to
    pub async fn delete(&self, station_id: i32) -> Result<(), Error> {
        let station_repo = StationRepository::new(self.db);

        if station_repo.get(station_id).await?.is_none() {
            return Err(Error::not_found(RESOURCE, station_id));
        }

        if station_repo.is_referenced(station_id).await? {
            return Err(ConflictError::InUse {
                resource: RESOURCE,
                id: station_id,
            }
            .into());
        }

        station_repo.delete(station_id).await?;

        Ok(())
    }
}

fn detail(station: StationModel) -> StationDetailDto {
    StationDetailDto {
        id: station.id,
        name: station.name,
        latitude: station.latitude,
        longitude: station.longitude,
    }
}

fn duplicate_name() -> ConflictError {
    ConflictError::Duplicate {
        resource: RESOURCE,
        field: "name",
    }
}

fn validate_name(name: Option<&str>) -> Result<(), ValidationError> {
    match name {
        Some(name) if name.trim().is_empty() => {
            Err(ValidationError::invalid("name", "name may not be blank"))
        }
        _ => Ok(()),
    }
}
