use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000005_crew::Crew, m20251101_000006_journey::Journey};

static PK_JOURNEY_CREW: &str = "pk-journey_crew";
static FK_JOURNEY_CREW_JOURNEY_ID: &str = "fk-journey_crew-journey_id";
static FK_JOURNEY_CREW_CREW_ID: &str = "fk-journey_crew-crew_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JourneyCrew::Table)
                    .if_not_exists()
                    .col(integer(JourneyCrew::JourneyId))
                    .col(integer(JourneyCrew::CrewId))
                    .primary_key(
                        Index::create()
                            .name(PK_JOURNEY_CREW)
                            .col(JourneyCrew::JourneyId)
                            .col(JourneyCrew::CrewId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOURNEY_CREW_JOURNEY_ID)
                    .from_tbl(JourneyCrew::Table)
                    .from_col(JourneyCrew::JourneyId)
                    .to_tbl(Journey::Table)
                    .to_col(Journey::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOURNEY_CREW_CREW_ID)
                    .from_tbl(JourneyCrew::Table)
                    .from_col(JourneyCrew::CrewId)
                    .to_tbl(Crew::Table)
                    .to_col(Crew::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_JOURNEY_CREW_CREW_ID)
                    .table(JourneyCrew::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_JOURNEY_CREW_JOURNEY_ID)
                    .table(JourneyCrew::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JourneyCrew::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum JourneyCrew {
    Table,
    JourneyId,
    CrewId,
}
