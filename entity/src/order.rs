use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTime,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::railway_user::Entity",
        from = "Column::UserId",
        to = "super::railway_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RailwayUser,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::railway_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RailwayUser.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
