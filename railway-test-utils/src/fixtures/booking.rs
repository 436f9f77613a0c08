//! Booking schema fixtures.
//!
//! Single-record inserters plus [`BookingFixtures::insert_booked_journey`], which creates a
//! journey together with everything it references.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

use crate::{
    error::TestError,
    model::{
        CrewModel, JourneyModel, OrderModel, RouteModel, StationModel, TicketModel, TrainModel,
        TrainTypeModel,
    },
    TestContext,
};

/// A journey and the records it depends on.
pub struct BookedJourney {
    pub source: StationModel,
    pub destination: StationModel,
    pub route: RouteModel,
    pub train_type: TrainTypeModel,
    pub train: TrainModel,
    pub journey: JourneyModel,
}

impl TestContext {
    pub fn booking<'a>(&'a self) -> BookingFixtures<'a> {
        BookingFixtures { test: self }
    }
}

pub struct BookingFixtures<'a> {
    test: &'a TestContext,
}

/// `2025-11-01 hh:mm:00`
pub fn mock_timestamp(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 11, 1)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap()
}

impl<'a> BookingFixtures<'a> {
    pub async fn insert_station(&self, name: &str) -> Result<StationModel, TestError> {
        Ok(
            entity::prelude::Station::insert(entity::station::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                latitude: ActiveValue::Set(50.45),
                longitude: ActiveValue::Set(30.52),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_route(
        &self,
        source_id: i32,
        destination_id: i32,
        distance: f64,
    ) -> Result<RouteModel, TestError> {
        Ok(entity::prelude::Route::insert(entity::route::ActiveModel {
            source_id: ActiveValue::Set(source_id),
            destination_id: ActiveValue::Set(destination_id),
            distance: ActiveValue::Set(distance),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_train_type(&self, name: &str) -> Result<TrainTypeModel, TestError> {
        Ok(
            entity::prelude::TrainType::insert(entity::train_type::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_train(
        &self,
        name: &str,
        cargo_num: i32,
        places_in_cargo: i32,
        train_type_id: i32,
    ) -> Result<TrainModel, TestError> {
        Ok(entity::prelude::Train::insert(entity::train::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            cargo_num: ActiveValue::Set(cargo_num),
            places_in_cargo: ActiveValue::Set(places_in_cargo),
            train_type_id: ActiveValue::Set(train_type_id),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_crew(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<CrewModel, TestError> {
        Ok(entity::prelude::Crew::insert(entity::crew::ActiveModel {
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_journey(
        &self,
        route_id: i32,
        train_id: i32,
        departure_time: NaiveDateTime,
        arrival_time: NaiveDateTime,
    ) -> Result<JourneyModel, TestError> {
        Ok(
            entity::prelude::Journey::insert(entity::journey::ActiveModel {
                route_id: ActiveValue::Set(route_id),
                train_id: ActiveValue::Set(train_id),
                departure_time: ActiveValue::Set(departure_time),
                arrival_time: ActiveValue::Set(arrival_time),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn assign_crew(&self, journey_id: i32, crew_id: i32) -> Result<(), TestError> {
        entity::prelude::JourneyCrew::insert(entity::journey_crew::ActiveModel {
            journey_id: ActiveValue::Set(journey_id),
            crew_id: ActiveValue::Set(crew_id),
        })
        .exec_without_returning(&self.test.db)
        .await?;

        Ok(())
    }

    /// Insert a journey with fresh stations, route, train type and train.
    ///
    /// Names are numbered after the stations already present so the fixture can be called
    /// repeatedly within one test. The route is 120 km, departure is `2025-11-01 08:00` and
    /// arrival `2025-11-01 14:30`.
    pub async fn insert_booked_journey(
        &self,
        cargo_num: i32,
        places_in_cargo: i32,
    ) -> Result<BookedJourney, TestError> {
        let n = entity::prelude::Station::find().count(&self.test.db).await? + 1;

        let source = self.insert_station(&format!("Station {}", n)).await?;
        let destination = self.insert_station(&format!("Station {}", n + 1)).await?;
        let route = self.insert_route(source.id, destination.id, 120.0).await?;
        let train_type = self.insert_train_type(&format!("Type {}", n)).await?;
        let train = self
            .insert_train(
                &format!("Train {}", n),
                cargo_num,
                places_in_cargo,
                train_type.id,
            )
            .await?;
        let journey = self
            .insert_journey(
                route.id,
                train.id,
                mock_timestamp(8, 0),
                mock_timestamp(14, 30),
            )
            .await?;

        Ok(BookedJourney {
            source,
            destination,
            route,
            train_type,
            train,
            journey,
        })
    }

    pub async fn insert_order(&self, user_id: i32) -> Result<OrderModel, TestError> {
        Ok(entity::prelude::Order::insert(entity::order::ActiveModel {
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    /// Insert a ticket row directly, bypassing seat validation.
    pub async fn insert_ticket(
        &self,
        order_id: i32,
        journey_id: i32,
        cargo: i32,
        seat: i32,
    ) -> Result<TicketModel, TestError> {
        Ok(entity::prelude::Ticket::insert(entity::ticket::ActiveModel {
            cargo: ActiveValue::Set(cargo),
            seat: ActiveValue::Set(seat),
            journey_id: ActiveValue::Set(journey_id),
            order_id: ActiveValue::Set(order_id),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }
}
