use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "journey")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub route_id: i32,
    pub train_id: i32,
    #[sea_orm(indexed)]
    pub departure_time: DateTime,
    #[sea_orm(indexed)]
    pub arrival_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::route::Entity",
        from = "Column::RouteId",
        to = "super::route::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Route,
    #[sea_orm(
        belongs_to = "super::train::Entity",
        from = "Column::TrainId",
        to = "super::train::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Train,
    #[sea_orm(has_many = "super::journey_crew::Entity")]
    JourneyCrew,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::route::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Route.def()
    }
}

impl Related<super::train::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Train.def()
    }
}

impl Related<super::journey_crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JourneyCrew.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl Related<super::crew::Entity> for Entity {
    fn to() -> RelationDef {
        super::journey_crew::Relation::Crew.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::journey_crew::Relation::Journey.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
