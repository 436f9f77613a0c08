pub use sea_orm_migration::prelude::*;

mod m20251101_000001_station;
mod m20251101_000002_route;
mod m20251101_000003_train_type;
mod m20251101_000004_train;
mod m20251101_000005_crew;
mod m20251101_000006_journey;
mod m20251101_000007_journey_crew;
mod m20251101_000008_railway_user;
mod m20251101_000009_order;
mod m20251101_000010_ticket;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_station::Migration),
            Box::new(m20251101_000002_route::Migration),
            Box::new(m20251101_000003_train_type::Migration),
            Box::new(m20251101_000004_train::Migration),
            Box::new(m20251101_000005_crew::Migration),
            Box::new(m20251101_000006_journey::Migration),
            Box::new(m20251101_000007_journey_crew::Migration),
            Box::new(m20251101_000008_railway_user::Migration),
            Box::new(m20251101_000009_order::Migration),
            Box::new(m20251101_000010_ticket::Migration),
        ]
    }
}
