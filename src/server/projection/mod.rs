//! Read and write representations of each resource.
//!
//! Every handler serves one `(Resource, Action)` pair and the representation it uses is
//! fixed by [`Projection::for_action`]. Each DTO names its projection through [`Projected`], and
//! handlers refuse to serve a DTO the table does not assign to them. The helpers in [`format`]
//! and [`seats`] build the display-oriented fields of the read projections.

pub mod format;
pub mod seats;

use crate::model::{
    crew::{CrewPatch, CrewReadDto, CrewRequest},
    journey::{JourneyDetailDto, JourneyListDto, JourneyPatch, JourneyRequest},
    order::{CreateOrderDto, OrderReadDto},
    route::{RoutePatch, RouteReadDto, RouteRequest},
    station::{StationDetailDto, StationListDto, StationPatch, StationRequest},
    train::{TrainPatch, TrainReadDto, TrainRequest, TrainTypeDto, TrainTypePatch, TrainTypeRequest},
};

/// Resource families exposed by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    /// `/api/stations`
    Station,
    /// `/api/routes`
    Route,
    /// `/api/train-types`
    TrainType,
    /// `/api/trains`
    Train,
    /// `/api/crews`
    Crew,
    /// `/api/journeys`
    Journey,
    /// `/api/order`
    Order,
}

/// Operations a handler can perform on a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// `GET` on the collection
    List,
    /// `GET` on a single record
    Retrieve,
    /// `POST` on the collection
    Create,
    /// `PUT` on a single record
    Update,
    /// `PATCH` on a single record
    PartialUpdate,
    /// `DELETE` on a single record
    Delete,
}

/// Named representation of a resource in requests or responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Projection {
    /// `id`, `name`
    StationList,
    /// `id`, `name`, `latitude`, `longitude`
    StationDetail,
    /// Raw station fields
    StationWrite,
    /// Stations by name, distance with unit
    RouteRead,
    /// Station ids and raw distance
    RouteWrite,
    /// `id`, `name`
    TrainType,
    /// Train with its type by name
    TrainRead,
    /// Train with its type id
    TrainWrite,
    /// `id`, `full_name`
    CrewRead,
    /// Raw crew fields
    CrewWrite,
    /// Route label, departure and ticket count
    JourneyList,
    /// Full journey with crews and taken seats
    JourneyDetail,
    /// Route, train and crew ids with raw timestamps
    JourneyWrite,
    /// Order with labelled tickets
    OrderRead,
    /// Ticket requests (cargo, seat, journey)
    OrderWrite,
}

impl Projection {
    /// Projection used by `action` on `resource`.
    ///
    /// Returns `None` when the action produces no representation (`Delete`) or is not offered
    /// for the resource (orders cannot be updated).
    pub fn for_action(resource: Resource, action: Action) -> Option<Self> {
        use Action::*;

        let projection = match (resource, action) {
            (_, Delete) => return None,
            (Resource::Order, Update | PartialUpdate) => return None,

            (Resource::Station, List) => Self::StationList,
            (Resource::Station, Retrieve) => Self::StationDetail,
            (Resource::Station, Create | Update | PartialUpdate) => Self::StationWrite,

            (Resource::Route, List | Retrieve) => Self::RouteRead,
            (Resource::Route, Create | Update | PartialUpdate) => Self::RouteWrite,

            (Resource::TrainType, _) => Self::TrainType,

            (Resource::Train, List | Retrieve) => Self::TrainRead,
            (Resource::Train, Create | Update | PartialUpdate) => Self::TrainWrite,

            (Resource::Crew, List | Retrieve) => Self::CrewRead,
            (Resource::Crew, Create | Update | PartialUpdate) => Self::CrewWrite,

            (Resource::Journey, List) => Self::JourneyList,
            (Resource::Journey, Retrieve) => Self::JourneyDetail,
            (Resource::Journey, Create | Update | PartialUpdate) => Self::JourneyWrite,

            (Resource::Order, List | Retrieve) => Self::OrderRead,
            (Resource::Order, Create) => Self::OrderWrite,
        };

        Some(projection)
    }
}

/// A type rendering one projection: the response body of a read or the request body of a write.
///
/// `()` stands for actions without a representation.
pub trait Projected {
    /// The projection rendered by this type
    const PROJECTION: Option<Projection>;
}

macro_rules! projected {
    ($($ty:ty => $projection:expr),* $(,)?) => {
        $(
            impl Projected for $ty {
                const PROJECTION: Option<Projection> = $projection;
            }
        )*
    };
}

projected! {
    () => None,
    StationListDto => Some(Projection::StationList),
    StationDetailDto => Some(Projection::StationDetail),
    StationRequest => Some(Projection::StationWrite),
    StationPatch => Some(Projection::StationWrite),
    RouteReadDto => Some(Projection::RouteRead),
    RouteRequest => Some(Projection::RouteWrite),
    RoutePatch => Some(Projection::RouteWrite),
    TrainTypeDto => Some(Projection::TrainType),
    TrainTypeRequest => Some(Projection::TrainType),
    TrainTypePatch => Some(Projection::TrainType),
    TrainReadDto => Some(Projection::TrainRead),
    TrainRequest => Some(Projection::TrainWrite),
    TrainPatch => Some(Projection::TrainWrite),
    CrewReadDto => Some(Projection::CrewRead),
    CrewRequest => Some(Projection::CrewWrite),
    CrewPatch => Some(Projection::CrewWrite),
    JourneyListDto => Some(Projection::JourneyList),
    JourneyDetailDto => Some(Projection::JourneyDetail),
    JourneyRequest => Some(Projection::JourneyWrite),
    JourneyPatch => Some(Projection::JourneyWrite),
    OrderReadDto => Some(Projection::OrderRead),
    CreateOrderDto => Some(Projection::OrderWrite),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_list_and_detail_differ() {
        assert_eq!(
            Projection::for_action(Resource::Station, Action::List),
            Some(Projection::StationList)
        );
        assert_eq!(
            Projection::for_action(Resource::Station, Action::Retrieve),
            Some(Projection::StationDetail)
        );
    }

    #[test]
    fn journey_uses_three_projections() {
        assert_eq!(
            Projection::for_action(Resource::Journey, Action::List),
            Some(Projection::JourneyList)
        );
        assert_eq!(
            Projection::for_action(Resource::Journey, Action::Retrieve),
            Some(Projection::JourneyDetail)
        );
        assert_eq!(
            Projection::for_action(Resource::Journey, Action::PartialUpdate),
            Some(Projection::JourneyWrite)
        );
    }

    #[test]
    fn writes_use_write_projection() {
        for action in [Action::Create, Action::Update, Action::PartialUpdate] {
            assert_eq!(
                Projection::for_action(Resource::Train, action),
                Some(Projection::TrainWrite)
            );
        }
    }

    #[test]
    fn orders_cannot_be_updated() {
        assert_eq!(Projection::for_action(Resource::Order, Action::Update), None);
        assert_eq!(
            Projection::for_action(Resource::Order, Action::PartialUpdate),
            None
        );
        assert_eq!(
            Projection::for_action(Resource::Order, Action::Create),
            Some(Projection::OrderWrite)
        );
    }

    #[test]
    fn dtos_render_their_table_entry() {
        assert_eq!(
            Projection::for_action(Resource::Journey, Action::List),
            JourneyListDto::PROJECTION
        );
        assert_eq!(
            Projection::for_action(Resource::Station, Action::PartialUpdate),
            StationPatch::PROJECTION
        );
        assert_eq!(
            Projection::for_action(Resource::Order, Action::Delete),
            <()>::PROJECTION
        );
        assert_ne!(
            Projection::for_action(Resource::Station, Action::List),
            StationDetailDto::PROJECTION
        );
    }

    #[test]
    fn delete_has_no_projection() {
        assert_eq!(Projection::for_action(Resource::Crew, Action::Delete), None);
    }
}
