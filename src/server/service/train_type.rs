//! Train type management.

use sea_orm::DatabaseConnection;

use crate::{
    model::train::{TrainTypeDto, TrainTypePatch, TrainTypeRequest},
    server::{
        data::train_type::TrainTypeRepository,
        error::{conflict::ConflictError, Error},
        model::db::TrainTypeModel,
    },
};

const RESOURCE: &str = "train type";

/// Validation and persistence rules for train types
pub struct TrainTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainTypeService<'a> {
    /// Creates a new instance of [`TrainTypeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists train types
    pub async fn list(&self) -> Result<Vec<TrainTypeDto>, Error> {
        let train_types = TrainTypeRepository::new(self.db).list().await?;

        Ok(train_types.into_iter().map(dto).collect())
    }

    /// Retrieves a train type, or `Error::NotFound`
    pub async fn get(&self, train_type_id: i32) -> Result<TrainTypeDto, Error> {
        TrainTypeRepository::new(self.db)
            .get(train_type_id)
            .await?
            .map(dto)
            .ok_or_else(|| Error::not_found(RESOURCE, train_type_id))
    }

    /// Validates and stores a new train type
    pub async fn create(&self, request: TrainTypeRequest) -> Result<TrainTypeDto, Error> {
        let train_type = TrainTypeRepository::new(self.db)
            .create(request)
            .await
            .map_err(|err| duplicate_name().on_unique_violation(err))?;

        Ok(dto(train_type))
    }

    /// Applies a full (`PUT`) or partial (`PATCH`) update
    pub async fn update(
        &self,
        train_type_id: i32,
        patch: TrainTypePatch,
    ) -> Result<TrainTypeDto, Error> {
        TrainTypeRepository::new(self.db)
            .update(train_type_id, patch)
            .await
            .map_err(|err| duplicate_name().on_unique_violation(err))?
            .map(dto)
            .ok_or_else(|| Error::not_found(RESOURCE, train_type_id))
    }

    /// Deletes a train type no train belongs to
    pub async fn delete(&self, train_type_id: i32) -> Result<(), Error> {
        let train_type_repo = TrainTypeRepository::new(self.db);

        if train_type_repo.get(train_type_id).await?.is_none() {
            return Err(Error::not_found(RESOURCE, train_type_id));
        }

        if train_type_repo.is_referenced(train_type_id).await? {
            return Err(ConflictError::InUse {
                resource: RESOURCE,
                id: train_type_id,
            }
            .into());
        }

        train_type_repo.delete(train_type_id).await?;

        Ok(())
    }
}

fn dto(train_type: TrainTypeModel) -> TrainTypeDto {
    TrainTypeDto {
        id: train_type.id,
        name: train_type.name,
    }
}

fn duplicate_name() -> ConflictError {
    ConflictError::Duplicate {
        resource: RESOURCE,
        field: "name",
    }
}

#[cfg(test)]
mod tests {
    use railway_test_utils::prelude::*;

    use crate::{
        model::train::{TrainTypePatch, TrainTypeRequest},
        server::{
            error::{conflict::ConflictError, Error},
            service::train_type::TrainTypeService,
        },
    };

    /// Expect a conflict when renaming onto an existing name
    #[tokio::test]
    async fn rejects_rename_to_existing_name() -> Result<(), TestError> {
        let test = TestBuilder::new().with_booking_tables().build().await?;
        test.booking().insert_train_type("Intercity").await?;
        let regional = test.booking().insert_train_type("Regional").await?;

        let train_type_service = TrainTypeService::new(&test.db);
        let result = train_type_service
            .update(
                regional.id,
                TrainTypePatch {
                    name: Some("Intercity".to_string()),
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(Error::ConflictError(ConflictError::Duplicate { .. }))
        ));

        Ok(())
    }

    /// Expect a conflict when deleting a type used by a train
    #[tokio::test]
    async fn refuses_type_with_trains() -> Result<(), TestError> {
        let test = TestBuilder::new().with_booking_tables().build().await?;
        let booked = test.booking().insert_booked_journey(1, 1).await?;

        let train_type_service = TrainTypeService::new(&test.db);
        let result = train_type_service.delete(booked.train_type.id).await;

        assert!(matches!(
            result,
            Err(Error::ConflictError(ConflictError::InUse { .. }))
        ));

        Ok(())
    }

    /// Expect a created type to be listed
    #[tokio::test]
    async fn lists_created_type() -> Result<(), TestError> {
        let test = TestBuilder::new().with_booking_tables().build().await?;

        let train_type_service = TrainTypeService::new(&test.db);
        let created = train_type_service
            .create(TrainTypeRequest {
                name: "Night".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(train_type_service.list().await.unwrap(), vec![created]);

        Ok(())
    }
}
