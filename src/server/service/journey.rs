//! Journey scheduling and crew assignment.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::journey::{JourneyDetailDto, JourneyDto, JourneyListDto, JourneyPatch, JourneyRequest},
    server::{
        data::{
            crew::CrewRepository, journey::JourneyRepository, route::RouteRepository,
            ticket::TicketRepository, train::TrainRepository,
        },
        error::{validation::ValidationError, Error},
        model::db::JourneyModel,
        projection::{format, seats::taken_seats},
        service::train::ensure_holds_booked,
        util::{capacity::TrainCapacity, time::format_timestamp},
    },
};

const RESOURCE: &str = "journey";

/// Journey scheduling, crew assignment and seat overview
pub struct JourneyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JourneyService<'a> {
    /// Creates a new instance of [`JourneyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists journeys with their route label and number of tickets sold
    pub async fn list(&self) -> Result<Vec<JourneyListDto>, Error> {
        let journey_repo = JourneyRepository::new(self.db);

        let journeys = journey_repo.list().await?;
        let journey_ids: Vec<i32> = journeys.iter().map(|journey| journey.id).collect();
        let counts = journey_repo.ticket_counts(&journey_ids).await?;
        let records = journey_repo.records(journeys).await?;

        Ok(records
            .into_iter()
            .map(|record| JourneyListDto {
                id: record.journey.id,
                route: format::route_label(
                    &record.source,
                    &record.destination,
                    record.route.distance,
                ),
                departure_time: format_timestamp(record.journey.departure_time),
                tickets_taken: counts.get(&record.journey.id).copied().unwrap_or(0),
            })
            .collect())
    }

    /// Full journey with crew names and taken seats grouped by cargo
    pub async fn get(&self, journey_id: i32) -> Result<JourneyDetailDto, Error> {
        let journey_repo = JourneyRepository::new(self.db);

        let Some(journey) = journey_repo.get(journey_id).await? else {
            return Err(Error::not_found(RESOURCE, journey_id));
        };

        let Some(record) = journey_repo.records(vec![journey]).await?.pop() else {
            return Err(Error::InternalError(format!(
                "journey {} vanished while reading",
                journey_id
            )));
        };

        let crew_ids = journey_repo.crew_ids(journey_id).await?;
        let crews = CrewRepository::new(self.db).get_many(&crew_ids).await?;
        let tickets = TicketRepository::new(self.db)
            .list_for_journey(journey_id)
            .await?;

        Ok(JourneyDetailDto {
            id: record.journey.id,
            route: format::route_label(&record.source, &record.destination, record.route.distance),
            train: record.train.name,
            departure_time: format_timestamp(record.journey.departure_time),
            arrival_time: format_timestamp(record.journey.arrival_time),
            crews: crews
                .iter()
                .map(|crew| format::full_name(&crew.first_name, &crew.last_name))
                .collect(),
            taken_seats: taken_seats(tickets.iter().map(|ticket| (ticket.cargo, ticket.seat))),
        })
    }

    /// Creates a journey and assigns its crew in one transaction
    pub async fn create(&self, request: JourneyRequest) -> Result<JourneyDto, Error> {
        self.validate(&JourneyPatch::from(request.clone()), None)
            .await?;

        let txn = self.db.begin().await?;

        let journey_repo = JourneyRepository::new(&txn);
        let journey = journey_repo
            .create(
                request.route,
                request.train,
                request.departure_time,
                request.arrival_time,
            )
            .await?;
        journey_repo.set_crews(journey.id, &request.crews).await?;
        let crews = journey_repo.crew_ids(journey.id).await?;

        txn.commit().await?;

        Ok(write(journey, crews))
    }

    /// Applies a full (`PUT`) or partial (`PATCH`) update
    ///
    /// The crew assignment is replaced only when `crews` is present.
    pub async fn update(&self, journey_id: i32, patch: JourneyPatch) -> Result<JourneyDto, Error> {
        let Some(existing) = JourneyRepository::new(self.db).get(journey_id).await? else {
            return Err(Error::not_found(RESOURCE, journey_id));
        };

        self.validate(&patch, Some(&existing)).await?;

        let txn = self.db.begin().await?;

        let journey_repo = JourneyRepository::new(&txn);
        let Some(journey) = journey_repo.update(journey_id, &patch).await? else {
            return Err(Error::not_found(RESOURCE, journey_id));
        };
        if let Some(crews) = &patch.crews {
            journey_repo.set_crews(journey_id, crews).await?;
        }
        let crews = journey_repo.crew_ids(journey_id).await?;

        txn.commit().await?;

        Ok(write(journey, crews))
    }

    /// Deletes a journey along with its tickets and crew assignment
    pub async fn delete(&self, journey_id: i32) -> Result<(), Error> {
        let result = JourneyRepository::new(self.db).delete(journey_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::not_found(RESOURCE, journey_id));
        }

        Ok(())
    }

    /// Checks references and timestamps of `patch` merged over `existing`
    ///
    /// Moving an existing journey to another train requires that train to hold its tickets.
    async fn validate(
        &self,
        patch: &JourneyPatch,
        existing: Option<&JourneyModel>,
    ) -> Result<(), Error> {
        if let Some(route_id) = patch.route {
            if RouteRepository::new(self.db).get(route_id).await?.is_none() {
                return Err(ValidationError::UnknownReference {
                    field: "route",
                    id: route_id,
                }
                .into());
            }
        }

        if let Some(train_id) = patch.train {
            let Some(train) = TrainRepository::new(self.db).get(train_id).await? else {
                return Err(ValidationError::UnknownReference {
                    field: "train",
                    id: train_id,
                }
                .into());
            };

            if let Some(journey) = existing.filter(|journey| journey.train_id != train_id) {
                let booked = TicketRepository::new(self.db)
                    .booked_extent_for_journey(journey.id)
                    .await?;
                ensure_holds_booked(RESOURCE, journey.id, TrainCapacity::from(&train), booked)?;
            }
        }

        if let Some(crew_ids) = &patch.crews {
            let found = CrewRepository::new(self.db).get_many(crew_ids).await?;
            if let Some(missing) = crew_ids
                .iter()
                .find(|id| !found.iter().any(|crew| crew.id == **id))
            {
                return Err(ValidationError::UnknownReference {
                    field: "crews",
                    id: *missing,
                }
                .into());
            }
        }

        let departure = patch
            .departure_time
            .or(existing.map(|journey| journey.departure_time));
        let arrival = patch
            .arrival_time
            .or(existing.map(|journey| journey.arrival_time));

        if let (Some(departure), Some(arrival)) = (departure, arrival) {
            if arrival < departure {
                return Err(ValidationError::invalid(
                    "arrival_time",
                    "arrival_time must not be earlier than departure_time",
                )
                .into());
            }
        }

        Ok(())
    }
}

fn write(journey: JourneyModel, crews: Vec<i32>) -> JourneyDto {
    JourneyDto {
        id: journey.id,
        route: journey.route_id,
        train: journey.train_id,
        crews,
        departure_time: journey.departure_time,
        arrival_time: journey.arrival_time,
    }
}

#[cfg(test)]
mod tests {
    mod list {
        use railway_test_utils::prelude::*;

        use crate::{model::journey::JourneyListDto, server::service::journey::JourneyService};

        /// Expect the route label, formatted departure and ticket count
        #[tokio::test]
        async fn renders_list_projection() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let rider = test.user().insert_user(TEST_EMAIL).await?;
            let booked = test.booking().insert_booked_journey(2, 10).await?;
            let order = test.booking().insert_order(rider.id).await?;
            test.booking()
                .insert_ticket(order.id, booked.journey.id, 1, 4)
                .await?;

            let journey_service = JourneyService::new(&test.db);
            let journeys = journey_service.list().await.unwrap();

            assert_eq!(
                journeys,
                vec![JourneyListDto {
                    id: booked.journey.id,
                    route: format!(
                        "{} -> {} (120.0 km)",
                        booked.source.name, booked.destination.name
                    ),
                    departure_time: "2025-11-01 08:00".to_string(),
                    tickets_taken: 1,
                }]
            );

            Ok(())
        }
    }

    mod get {
        use railway_test_utils::prelude::*;

        use crate::{model::journey::TakenSeatsDto, server::service::journey::JourneyService};

        /// Expect crew names and taken seats grouped by cargo
        #[tokio::test]
        async fn renders_detail_projection() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let rider = test.user().insert_user(TEST_EMAIL).await?;
            let booked = test.booking().insert_booked_journey(2, 10).await?;
            let crew = test.booking().insert_crew("Olena", "Shevchenko").await?;
            test.booking().assign_crew(booked.journey.id, crew.id).await?;
            let order = test.booking().insert_order(rider.id).await?;
            for (cargo, seat) in [(1, 3), (1, 1), (2, 5)] {
                test.booking()
                    .insert_ticket(order.id, booked.journey.id, cargo, seat)
                    .await?;
            }

            let journey_service = JourneyService::new(&test.db);
            let detail = journey_service.get(booked.journey.id).await.unwrap();

            assert_eq!(detail.train, booked.train.name);
            assert_eq!(detail.arrival_time, "2025-11-01 14:30");
            assert_eq!(detail.crews, vec!["Olena Shevchenko".to_string()]);
            assert_eq!(
                detail.taken_seats,
                vec![
                    TakenSeatsDto {
                        cargo: 1,
                        seat: "1, 3".to_string()
                    },
                    TakenSeatsDto {
                        cargo: 2,
                        seat: "5".to_string()
                    },
                ]
            );

            Ok(())
        }
    }

    mod create {
        use railway_test_utils::prelude::*;

        use crate::{
            model::journey::JourneyRequest,
            server::{
                error::{validation::ValidationError, Error},
                service::journey::JourneyService,
            },
        };

        /// Expect the journey to be created with its crew
        #[tokio::test]
        async fn creates_journey_with_crew() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let booked = test.booking().insert_booked_journey(2, 10).await?;
            let crew = test.booking().insert_crew("Olena", "Shevchenko").await?;

            let journey_service = JourneyService::new(&test.db);
            let created = journey_service
                .create(JourneyRequest {
                    route: booked.route.id,
                    train: booked.train.id,
                    crews: vec![crew.id],
                    departure_time: mock_timestamp(9, 0),
                    arrival_time: mock_timestamp(12, 0),
                })
                .await
                .unwrap();

            assert_eq!(created.crews, vec![crew.id]);
            assert_eq!(created.route, booked.route.id);

            Ok(())
        }

        /// Expect a validation error when arrival precedes departure
        #[tokio::test]
        async fn rejects_arrival_before_departure() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let booked = test.booking().insert_booked_journey(2, 10).await?;

            let journey_service = JourneyService::new(&test.db);
            let result = journey_service
                .create(JourneyRequest {
                    route: booked.route.id,
                    train: booked.train.id,
                    crews: Vec::new(),
                    departure_time: mock_timestamp(12, 0),
                    arrival_time: mock_timestamp(9, 0),
                })
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::InvalidField {
                    field: "arrival_time",
                    ..
                }))
            ));

            Ok(())
        }

        /// Expect a validation error naming the unknown crew member
        #[tokio::test]
        async fn rejects_unknown_crew() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let booked = test.booking().insert_booked_journey(2, 10).await?;

            let journey_service = JourneyService::new(&test.db);
            let result = journey_service
                .create(JourneyRequest {
                    route: booked.route.id,
                    train: booked.train.id,
                    crews: vec![77],
                    departure_time: mock_timestamp(9, 0),
                    arrival_time: mock_timestamp(12, 0),
                })
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::UnknownReference {
                    field: "crews",
                    id: 77
                }))
            ));

            Ok(())
        }
    }

    mod update {
        use railway_test_utils::prelude::*;

        use crate::{
            model::journey::JourneyPatch,
            server::{
                error::{conflict::ConflictError, validation::ValidationError, Error},
                service::journey::JourneyService,
            },
        };

        /// Expect the stored departure to be used when only arrival is patched
        #[tokio::test]
        async fn checks_patched_arrival_against_stored_departure() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let booked = test.booking().insert_booked_journey(2, 10).await?;

            let journey_service = JourneyService::new(&test.db);
            let result = journey_service
                .update(
                    booked.journey.id,
                    JourneyPatch {
                        arrival_time: Some(mock_timestamp(7, 0)),
                        ..Default::default()
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::InvalidField { .. }))
            ));

            Ok(())
        }

        /// Expect a conflict when the new train lacks a booked seat
        #[tokio::test]
        async fn rejects_train_without_booked_seat() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let rider = test.user().insert_user(TEST_EMAIL).await?;
            let booked = test.booking().insert_booked_journey(2, 10).await?;
            let small = test
                .booking()
                .insert_train("Shuttle", 1, 5, booked.train_type.id)
                .await?;
            let order = test.booking().insert_order(rider.id).await?;
            test.booking()
                .insert_ticket(order.id, booked.journey.id, 2, 10)
                .await?;

            let journey_service = JourneyService::new(&test.db);
            let result = journey_service
                .update(
                    booked.journey.id,
                    JourneyPatch {
                        train: Some(small.id),
                        ..Default::default()
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::ConflictError(ConflictError::BookedBeyondCapacity {
                    cargo: 2,
                    seat: 10,
                    ..
                }))
            ));

            Ok(())
        }

        /// Expect crews to stay assigned when the patch omits them
        #[tokio::test]
        async fn keeps_crew_when_omitted() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let booked = test.booking().insert_booked_journey(2, 10).await?;
            let crew = test.booking().insert_crew("Olena", "Shevchenko").await?;
            test.booking().assign_crew(booked.journey.id, crew.id).await?;

            let journey_service = JourneyService::new(&test.db);
            let updated = journey_service
                .update(
                    booked.journey.id,
                    JourneyPatch {
                        departure_time: Some(mock_timestamp(7, 30)),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();

            assert_eq!(updated.crews, vec![crew.id]);
            assert_eq!(updated.departure_time, mock_timestamp(7, 30));

            Ok(())
        }
    }

    mod delete {
        use railway_test_utils::prelude::*;
        use sea_orm::{EntityTrait, PaginatorTrait};

        use crate::server::service::journey::JourneyService;

        /// Expect tickets of the journey to be deleted with it
        #[tokio::test]
        async fn cascades_to_tickets() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let rider = test.user().insert_user(TEST_EMAIL).await?;
            let booked = test.booking().insert_booked_journey(2, 10).await?;
            let order = test.booking().insert_order(rider.id).await?;
            test.booking()
                .insert_ticket(order.id, booked.journey.id, 1, 1)
                .await?;

            let journey_service = JourneyService::new(&test.db);
            journey_service.delete(booked.journey.id).await.unwrap();

            assert_eq!(entity::prelude::Ticket::find().count(&test.db).await?, 0);

            Ok(())
        }
    }
}
