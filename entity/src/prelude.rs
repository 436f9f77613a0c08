pub use super::crew::Entity as Crew;
pub use super::journey::Entity as Journey;
pub use super::journey_crew::Entity as JourneyCrew;
pub use super::order::Entity as Order;
pub use super::railway_user::Entity as RailwayUser;
pub use super::route::Entity as Route;
pub use super::station::Entity as Station;
pub use super::ticket::Entity as Ticket;
pub use super::train::Entity as Train;
pub use super::train_type::Entity as TrainType;
