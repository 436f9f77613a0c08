//! Train management.

use sea_orm::DatabaseConnection;

use crate::{
    model::train::{TrainDto, TrainListQuery, TrainPatch, TrainReadDto, TrainRequest},
    server::{
        data::{ticket::TicketRepository, train::TrainRepository, train_type::TrainTypeRepository},
        error::{conflict::ConflictError, validation::ValidationError, Error},
        model::db::TrainModel,
        util::{capacity::TrainCapacity, filter::parse_id_list},
    },
};

const RESOURCE: &str = "train";

/// Validation and persistence rules for trains
pub struct TrainService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainService<'a> {
    /// Creates a new instance of [`TrainService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists trains, optionally restricted by `?train_type=1,2`
    ///
    /// # Returns
    /// - `Ok(Vec<TrainReadDto>)` - Matching trains ordered by ID
    /// - `Err(Error::ValidationError)` - The filter is malformed or names an unknown train type
    pub async fn list(&self, query: TrainListQuery) -> Result<Vec<TrainReadDto>, Error> {
        let train_type_ids = match query.train_type.as_deref() {
            Some(value) => {
                let ids = parse_id_list("train_type", value)?;

                let missing = TrainTypeRepository::new(self.db).find_missing(&ids).await?;
                if let Some(id) = missing.first() {
                    return Err(ValidationError::UnknownReference {
                        field: "train_type",
                        id: *id,
                    }
                    .into());
                }

                Some(ids)
            }
            None => None,
        };

        let trains = TrainRepository::new(self.db)
            .list(train_type_ids.as_deref())
            .await?;

        self.read(trains).await
    }

    /// Retrieves a train, or `Error::NotFound`
    pub async fn get(&self, train_id: i32) -> Result<TrainReadDto, Error> {
        let Some(train) = TrainRepository::new(self.db).get(train_id).await? else {
            return Err(Error::not_found(RESOURCE, train_id));
        };

        let mut trains = self.read(vec![train]).await?;

        trains
            .pop()
            .ok_or_else(|| Error::InternalError(format!("train {} vanished while reading", train_id)))
    }

    /// Validates and stores a new train
    pub async fn create(&self, request: TrainRequest) -> Result<TrainDto, Error> {
        validate_capacity(Some(request.cargo_num), Some(request.places_in_cargo))?;
        self.validate_train_type(Some(request.train_type)).await?;

        let train = TrainRepository::new(self.db)
            .create(request)
            .await
            .map_err(|err| duplicate_name().on_unique_violation(err))?;

        Ok(write(train))
    }

    /// Applies a full (`PUT`) or partial (`PATCH`) update
    ///
    /// The capacity may not shrink below a seat already booked on any of the train's journeys.
    pub async fn update(&self, train_id: i32, patch: TrainPatch) -> Result<TrainDto, Error> {
        validate_capacity(patch.cargo_num, patch.places_in_cargo)?;
        self.validate_train_type(patch.train_type).await?;

        if patch.cargo_num.is_some() || patch.places_in_cargo.is_some() {
            let Some(existing) = TrainRepository::new(self.db).get(train_id).await? else {
                return Err(Error::not_found(RESOURCE, train_id));
            };

            let capacity = TrainCapacity {
                cargo_num: patch.cargo_num.unwrap_or(existing.cargo_num),
                places_in_cargo: patch.places_in_cargo.unwrap_or(existing.places_in_cargo),
            };
            let booked = TicketRepository::new(self.db)
                .booked_extent_for_train(train_id)
                .await?;
            ensure_holds_booked(RESOURCE, train_id, capacity, booked)?;
        }

        TrainRepository::new(self.db)
            .update(train_id, patch)
            .await
            .map_err(|err| duplicate_name().on_unique_violation(err))?
            .map(write)
            .ok_or_else(|| Error::not_found(RESOURCE, train_id))
    }

    /// Deletes a train no journey uses
    pub async fn delete(&self, train_id: i32) -> Result<(), Error> {
        let train_repo = TrainRepository::new(self.db);

        if train_repo.get(train_id).await?.is_none() {
            return Err(Error::not_found(RESOURCE, train_id));
        }

        if train_repo.is_referenced(train_id).await? {
            return Err(ConflictError::InUse {
                resource: RESOURCE,
                id: train_id,
            }
            .into());
        }

        train_repo.delete(train_id).await?;

        Ok(())
    }

    async fn validate_train_type(&self, train_type_id: Option<i32>) -> Result<(), Error> {
        let Some(train_type_id) = train_type_id else {
            return Ok(());
        };

        if TrainTypeRepository::new(self.db)
            .get(train_type_id)
            .await?
            .is_none()
        {
            return Err(ValidationError::UnknownReference {
                field: "train_type",
                id: train_type_id,
            }
            .into());
        }

        Ok(())
    }

    async fn read(&self, trains: Vec<TrainModel>) -> Result<Vec<TrainReadDto>, Error> {
        let train_type_ids: Vec<i32> = trains.iter().map(|train| train.train_type_id).collect();
        let names = TrainTypeRepository::new(self.db)
            .get_names(&train_type_ids)
            .await?;

        trains
            .into_iter()
            .map(|train| {
                let train_type = names.get(&train.train_type_id).cloned().ok_or_else(|| {
                    Error::InternalError(format!(
                        "train type {} missing for train {}",
                        train.train_type_id, train.id
                    ))
                })?;

                Ok(TrainReadDto {
                    id: train.id,
                    name: train.name,
                    cargo_num: train.cargo_num,
                    places_in_cargo: train.places_in_cargo,
                    train_type,
                })
            })
            .collect()
    }
}

fn write(train: TrainModel) -> TrainDto {
    TrainDto {
        id: train.id,
        name: train.name,
        cargo_num: train.cargo_num,
        places_in_cargo: train.places_in_cargo,
        train_type: train.train_type_id,
    }
}

fn duplicate_name() -> ConflictError {
    ConflictError::Duplicate {
        resource: RESOURCE,
        field: "name",
    }
}

/// Rejects `capacity` when it no longer covers the `booked` extent
pub(crate) fn ensure_holds_booked(
    resource: &'static str,
    id: i32,
    capacity: TrainCapacity,
    booked: Option<TrainCapacity>,
) -> Result<(), ConflictError> {
    match booked {
        Some(booked)
            if booked.cargo_num > capacity.cargo_num
                || booked.places_in_cargo > capacity.places_in_cargo =>
        {
            Err(ConflictError::BookedBeyondCapacity {
                resource,
                id,
                cargo: booked.cargo_num,
                seat: booked.places_in_cargo,
            })
        }
        _ => Ok(()),
    }
}

/// A train needs at least one cargo with at least one seat
fn validate_capacity(
    cargo_num: Option<i32>,
    places_in_cargo: Option<i32>,
) -> Result<(), ValidationError> {
    if matches!(cargo_num, Some(n) if n < 1) {
        return Err(ValidationError::invalid(
            "cargo_num",
            "cargo_num must be at least 1",
        ));
    }

    if matches!(places_in_cargo, Some(n) if n < 1) {
        return Err(ValidationError::invalid(
            "places_in_cargo",
            "places_in_cargo must be at least 1",
        ));
    }

    Ok(())
}
