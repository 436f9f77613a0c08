use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "train")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub cargo_num: i32,
    pub places_in_cargo: i32,
    pub train_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::train_type::Entity",
        from = "Column::TrainTypeId",
        to = "super::train_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    TrainType,
    #[sea_orm(has_many = "super::journey::Entity")]
    Journey,
}

impl Related<super::train_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainType.def()
    }
}

impl Related<super::journey::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Journey.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
