use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of an order creation request
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderDto {
    pub tickets: Vec<TicketRequest>,
}

/// A single seat requested as part of an order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct TicketRequest {
    pub cargo: i32,
    pub seat: i32,
    /// Journey ID
    pub journey: i32,
}

/// Order as written, returned from order creation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub created_at: NaiveDateTime,
    pub user: i32,
    pub tickets: Vec<TicketDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TicketDto {
    pub id: i32,
    pub cargo: i32,
    pub seat: i32,
    pub journey: i32,
}

/// Order rendered for display
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderReadDto {
    pub id: i32,
    pub created_at: String,
    pub tickets: Vec<OrderTicketDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderTicketDto {
    pub id: i32,
    /// `"<source> -> <destination> (<train>)"`
    pub journey: String,
    pub cargo: i32,
    pub seat: i32,
    pub departure_time: String,
    pub arrival_time: String,
}
