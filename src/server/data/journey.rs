//! Journeys, their crew assignments and the lookups needed to render them.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::journey::JourneyPatch,
    server::{
        data::{route::RouteRepository, station::StationRepository, train::TrainRepository},
        model::db::{JourneyModel, RouteModel, TrainModel},
        util::capacity::TrainCapacity,
    },
};

/// A journey with its route, station names and train resolved.
#[derive(Clone, Debug)]
pub struct JourneyRecord {
    /// The journey itself
    pub journey: JourneyModel,
    /// Route the journey runs on
    pub route: RouteModel,
    /// Name of the departure station
    pub source: String,
    /// Name of the arrival station
    pub destination: String,
    /// Train running the journey
    pub train: TrainModel,
}

/// Queries on journeys, usable on a pool or inside a transaction
pub struct JourneyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JourneyRepository<'a, C> {
    /// Creates a new instance of [`JourneyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a journey
    pub async fn create(
        &self,
        route_id: i32,
        train_id: i32,
        departure_time: NaiveDateTime,
        arrival_time: NaiveDateTime,
    ) -> Result<JourneyModel, DbErr> {
        let journey = entity::journey::ActiveModel {
            route_id: ActiveValue::Set(route_id),
            train_id: ActiveValue::Set(train_id),
            departure_time: ActiveValue::Set(departure_time),
            arrival_time: ActiveValue::Set(arrival_time),
            ..Default::default()
        };

        journey.insert(self.db).await
    }

    /// Every journey, ordered by ID
    pub async fn list(&self) -> Result<Vec<JourneyModel>, DbErr> {
        entity::prelude::Journey::find()
            .order_by_asc(entity::journey::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a journey by ID
    pub async fn get(&self, journey_id: i32) -> Result<Option<JourneyModel>, DbErr> {
        entity::prelude::Journey::find_by_id(journey_id)
            .one(self.db)
            .await
    }

    /// Journeys with the given IDs
    pub async fn get_many(&self, journey_ids: &[i32]) -> Result<Vec<JourneyModel>, DbErr> {
        entity::prelude::Journey::find()
            .filter(entity::journey::Column::Id.is_in(journey_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Capacity of the train running the journey, `None` if the journey does not exist
    pub async fn capacity(&self, journey_id: i32) -> Result<Option<TrainCapacity>, DbErr> {
        let journey = entity::prelude::Journey::find_by_id(journey_id)
            .find_also_related(entity::prelude::Train)
            .one(self.db)
            .await?;

        Ok(journey.and_then(|(_, train)| train.as_ref().map(TrainCapacity::from)))
    }

    /// Applies the route, train and timestamps present in `patch`
    ///
    /// Crew assignments are replaced separately with [`JourneyRepository::set_crews`].
    /// Returns `None` if the journey does not exist.
    pub async fn update(
        &self,
        journey_id: i32,
        patch: &JourneyPatch,
    ) -> Result<Option<JourneyModel>, DbErr> {
        let Some(journey) = self.get(journey_id).await? else {
            return Ok(None);
        };

        let mut journey_am = journey.into_active_model();
        if let Some(route) = patch.route {
            journey_am.route_id = ActiveValue::Set(route);
        }
        if let Some(train) = patch.train {
            journey_am.train_id = ActiveValue::Set(train);
        }
        if let Some(departure_time) = patch.departure_time {
            journey_am.departure_time = ActiveValue::Set(departure_time);
        }
        if let Some(arrival_time) = patch.arrival_time {
            journey_am.arrival_time = ActiveValue::Set(arrival_time);
        }

        Ok(Some(journey_am.update(self.db).await?))
    }

    /// Deletes a journey along with its crew assignments and tickets
    ///
    /// Returns OK regardless of the journey existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, journey_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Journey::delete_by_id(journey_id)
            .exec(self.db)
            .await
    }

    /// IDs of the crew members assigned to the journey, ascending
    pub async fn crew_ids(&self, journey_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::JourneyCrew::find()
            .select_only()
            .column(entity::journey_crew::Column::CrewId)
            .filter(entity::journey_crew::Column::JourneyId.eq(journey_id))
            .order_by_asc(entity::journey_crew::Column::CrewId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Replaces the crew assigned to the journey, ignoring repeated IDs
    pub async fn set_crews(&self, journey_id: i32, crew_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::JourneyCrew::delete_many()
            .filter(entity::journey_crew::Column::JourneyId.eq(journey_id))
            .exec(self.db)
            .await?;

        let mut crew_ids = crew_ids.to_vec();
        crew_ids.sort_unstable();
        crew_ids.dedup();

        if crew_ids.is_empty() {
            return Ok(());
        }

        let links = crew_ids
            .iter()
            .map(|crew_id| entity::journey_crew::ActiveModel {
                journey_id: ActiveValue::Set(journey_id),
                crew_id: ActiveValue::Set(*crew_id),
            });

        entity::prelude::JourneyCrew::insert_many(links)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Number of tickets sold per journey; journeys without tickets are absent
    pub async fn ticket_counts(&self, journey_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        let counts = entity::prelude::Ticket::find()
            .select_only()
            .column(entity::ticket::Column::JourneyId)
            .column_as(entity::ticket::Column::Id.count(), "tickets")
            .filter(entity::ticket::Column::JourneyId.is_in(journey_ids.to_vec()))
            .group_by(entity::ticket::Column::JourneyId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(journey_id, tickets)| (journey_id, tickets as u64))
            .collect())
    }

    /// Resolves route, station names and train for each journey, keeping the input order
    pub async fn records(&self, journeys: Vec<JourneyModel>) -> Result<Vec<JourneyRecord>, DbErr> {
        let route_ids: Vec<i32> = journeys.iter().map(|j| j.route_id).collect();
        let train_ids: Vec<i32> = journeys.iter().map(|j| j.train_id).collect();

        let routes: HashMap<i32, RouteModel> = RouteRepository::new(self.db)
            .get_many(&route_ids)
            .await?
            .into_iter()
            .map(|route| (route.id, route))
            .collect();
        let trains: HashMap<i32, TrainModel> = TrainRepository::new(self.db)
            .get_many(&train_ids)
            .await?
            .into_iter()
            .map(|train| (train.id, train))
            .collect();

        let station_ids: Vec<i32> = routes
            .values()
            .flat_map(|route| [route.source_id, route.destination_id])
            .collect();
        let stations = StationRepository::new(self.db)
            .get_names(&station_ids)
            .await?;

        journeys
            .into_iter()
            .map(|journey| {
                let route = routes.get(&journey.route_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!("route {} of journey {}", journey.route_id, journey.id))
                })?;
                let train = trains.get(&journey.train_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!("train {} of journey {}", journey.train_id, journey.id))
                })?;
                let station_name = |station_id: i32| {
                    stations.get(&station_id).cloned().ok_or_else(|| {
                        DbErr::RecordNotFound(format!("station {} of route {}", station_id, route.id))
                    })
                };

                Ok(JourneyRecord {
                    source: station_name(route.source_id)?,
                    destination: station_name(route.destination_id)?,
                    journey,
                    route,
                    train,
                })
            })
            .collect()
    }
}
