//! Crew members.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::crew::{CrewPatch, CrewRequest},
    server::model::db::CrewModel,
};

/// Queries on crew members, usable on a pool or inside a transaction
pub struct CrewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CrewRepository<'a, C> {
    /// Creates a new instance of [`CrewRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a crew member
    pub async fn create(&self, request: CrewRequest) -> Result<CrewModel, DbErr> {
        let crew = entity::crew::ActiveModel {
            first_name: ActiveValue::Set(request.first_name),
            last_name: ActiveValue::Set(request.last_name),
            ..Default::default()
        };

        crew.insert(self.db).await
    }

    /// Every crew member, ordered by ID
    pub async fn list(&self) -> Result<Vec<CrewModel>, DbErr> {
        entity::prelude::Crew::find()
            .order_by_asc(entity::crew::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a crew member by ID
    pub async fn get(&self, crew_id: i32) -> Result<Option<CrewModel>, DbErr> {
        entity::prelude::Crew::find_by_id(crew_id).one(self.db).await
    }

    /// Crew members with the given IDs
    pub async fn get_many(&self, crew_ids: &[i32]) -> Result<Vec<CrewModel>, DbErr> {
        entity::prelude::Crew::find()
            .filter(entity::crew::Column::Id.is_in(crew_ids.to_vec()))
            .order_by_asc(entity::crew::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the fields present in `patch`
    ///
    /// Returns `None` if the crew member does not exist.
    pub async fn update(&self, crew_id: i32, patch: CrewPatch) -> Result<Option<CrewModel>, DbErr> {
        let Some(crew) = self.get(crew_id).await? else {
            return Ok(None);
        };

        let mut crew_am = crew.into_active_model();
        if let Some(first_name) = patch.first_name {
            crew_am.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = patch.last_name {
            crew_am.last_name = ActiveValue::Set(last_name);
        }

        Ok(Some(crew_am.update(self.db).await?))
    }

    /// Deletes a crew member along with their journey assignments
    ///
    /// Returns OK regardless of the crew member existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, crew_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Crew::delete_by_id(crew_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod delete {
        use railway_test_utils::prelude::*;
        use sea_orm::{EntityTrait, PaginatorTrait};

        use crate::server::data::crew::CrewRepository;

        /// Expect journey assignments to be removed with the crew member
        #[tokio::test]
        async fn cascades_to_assignments() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let booked = test.booking().insert_booked_journey(1, 1).await?;
            let crew = test.booking().insert_crew("Olena", "Shevchenko").await?;
            test.booking().assign_crew(booked.journey.id, crew.id).await?;

            let crew_repo = CrewRepository::new(&test.db);
            let result = crew_repo.delete(crew.id).await?;

            assert_eq!(result.rows_affected, 1);
            let assignments = entity::prelude::JourneyCrew::find().count(&test.db).await?;
            assert_eq!(assignments, 0);

            Ok(())
        }
    }

    mod get_many {
        use railway_test_utils::prelude::*;

        use crate::server::data::crew::CrewRepository;

        /// Expect only existing crew members, ordered by ID
        #[tokio::test]
        async fn skips_unknown_ids() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let olena = test.booking().insert_crew("Olena", "Shevchenko").await?;
            let taras = test.booking().insert_crew("Taras", "Bondar").await?;

            let crew_repo = CrewRepository::new(&test.db);
            let crews = crew_repo.get_many(&[taras.id, 99, olena.id]).await?;

            assert_eq!(crews, vec![olena, taras]);

            Ok(())
        }
    }
}
