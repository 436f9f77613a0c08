use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "route")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub source_id: i32,
    pub destination_id: i32,
    pub distance: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::SourceId",
        to = "super::station::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Source,
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::DestinationId",
        to = "super::station::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Destination,
    #[sea_orm(has_many = "super::journey::Entity")]
    Journey,
}

impl Related<super::journey::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Journey.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
