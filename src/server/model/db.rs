//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate so repositories and services do
//! not need to import `entity::<table>::Model` directly.

/// A named stop with coordinates.
pub type StationModel = entity::station::Model;

/// Directed edge between two stations with a distance in kilometres.
pub type RouteModel = entity::route::Model;

/// Category of train, e.g. "Intercity".
pub type TrainTypeModel = entity::train_type::Model;

/// A train and its capacity (`cargo_num` cargos of `places_in_cargo` seats).
pub type TrainModel = entity::train::Model;

/// Crew member assignable to journeys.
pub type CrewModel = entity::crew::Model;

/// Scheduled run of a train along a route.
///
/// Crew assignments live in [`JourneyCrewModel`].
pub type JourneyModel = entity::journey::Model;

/// Link between a journey and an assigned crew member.
pub type JourneyCrewModel = entity::journey_crew::Model;

/// Registered user account.
///
/// # Fields (from `entity::railway_user::Model`)
/// - `id` - Primary key
/// - `email` - Unique login
/// - `password_hash` - Bcrypt hash, never returned by the API
/// - `created_at` - Registration timestamp
pub type UserModel = entity::railway_user::Model;

/// A user's purchase grouping one or more tickets.
pub type OrderModel = entity::order::Model;

/// Reservation of one seat in one cargo for one journey.
pub type TicketModel = entity::ticket::Model;
