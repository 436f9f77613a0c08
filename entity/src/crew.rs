use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "crew")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub first_name: String,
    #[sea_orm(indexed)]
    pub last_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::journey_crew::Entity")]
    JourneyCrew,
}

impl Related<super::journey_crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JourneyCrew.def()
    }
}

impl Related<super::journey::Entity> for Entity {
    fn to() -> RelationDef {
        super::journey_crew::Relation::Journey.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::journey_crew::Relation::Crew.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
