use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_train_type::TrainType;

static IDX_TRAIN_TRAIN_TYPE_ID: &str = "idx-train-train_type_id";
static FK_TRAIN_TRAIN_TYPE_ID: &str = "fk-train-train_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Train::Table)
                    .if_not_exists()
                    .col(pk_auto(Train::Id))
                    .col(string_len_uniq(Train::Name, 100))
                    .col(integer(Train::CargoNum))
                    .col(integer(Train::PlacesInCargo))
                    .col(integer(Train::TrainTypeId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRAIN_TRAIN_TYPE_ID)
                    .table(Train::Table)
                    .col(Train::TrainTypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRAIN_TRAIN_TYPE_ID)
                    .from_tbl(Train::Table)
                    .from_col(Train::TrainTypeId)
                    .to_tbl(TrainType::Table)
                    .to_col(TrainType::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TRAIN_TRAIN_TYPE_ID)
                    .table(Train::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRAIN_TRAIN_TYPE_ID)
                    .table(Train::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Train::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Train {
    Table,
    Id,
    Name,
    CargoNum,
    PlacesInCargo,
    TrainTypeId,
}
