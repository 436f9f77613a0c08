use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "journey_crew")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub journey_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub crew_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::journey::Entity",
        from = "Column::JourneyId",
        to = "super::journey::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Journey,
    #[sea_orm(
        belongs_to = "super::crew::Entity",
        from = "Column::CrewId",
        to = "super::crew::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Crew,
}

impl Related<super::journey::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Journey.def()
    }
}

impl Related<super::crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Crew.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
