//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main railway crate.

pub type StationModel = entity::station::Model;
pub type RouteModel = entity::route::Model;
pub type TrainTypeModel = entity::train_type::Model;
pub type TrainModel = entity::train::Model;
pub type CrewModel = entity::crew::Model;
pub type JourneyModel = entity::journey::Model;
pub type UserModel = entity::railway_user::Model;
pub type OrderModel = entity::order::Model;
pub type TicketModel = entity::ticket::Model;
