//! Crew management.

use sea_orm::DatabaseConnection;

use crate::{
    model::crew::{CrewDto, CrewPatch, CrewReadDto, CrewRequest},
    server::{
        data::crew::CrewRepository, error::Error, model::db::CrewModel, projection::format,
    },
};

const RESOURCE: &str = "crew";

/// Validation and persistence rules for crew members
pub struct CrewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CrewService<'a> {
    /// Creates a new instance of [`CrewService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists crew members
    pub async fn list(&self) -> Result<Vec<CrewReadDto>, Error> {
        let crews = CrewRepository::new(self.db).list().await?;

        Ok(crews.into_iter().map(read).collect())
    }

    /// Retrieves a crew member, or `Error::NotFound`
    pub async fn get(&self, crew_id: i32) -> Result<CrewReadDto, Error> {
        CrewRepository::new(self.db)
            .get(crew_id)
            .await?
            .map(read)
            .ok_or_else(|| Error::not_found(RESOURCE, crew_id))
    }

    /// Validates and stores a new crew member
    pub async fn create(&self, request: CrewRequest) -> Result<CrewDto, Error> {
        let crew = CrewRepository::new(self.db).create(request).await?;

        Ok(write(crew))
    }

    /// Applies a full (`PUT`) or partial (`PATCH`) update
    pub async fn update(&self, crew_id: i32, patch: CrewPatch) -> Result<CrewDto, Error> {
        CrewRepository::new(self.db)
            .update(crew_id, patch)
            .await?
            .map(write)
            .ok_or_else(|| Error::not_found(RESOURCE, crew_id))
    }

    /// Deletes a crew member, unassigning them from their journeys
    pub async fn delete(&self, crew_id: i32) -> Result<(), Error> {
        let result = CrewRepository::new(self.db).delete(crew_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::not_found(RESOURCE, crew_id));
        }

        Ok(())
    }
}

fn read(crew: CrewModel) -> CrewReadDto {
    CrewReadDto {
        id: crew.id,
        full_name: format::full_name(&crew.first_name, &crew.last_name),
    }
}

fn write(crew: CrewModel) -> CrewDto {
    CrewDto {
        id: crew.id,
        first_name: crew.first_name,
        last_name: crew.last_name,
    }
}
