//! Seat and cargo bounds of a train.
//!
//! Every ticket must point at an existing seat: `1 <= seat <= places_in_cargo` and
//! `1 <= cargo <= cargo_num`. The rule is consulted both when an order is validated and when a
//! ticket row is written, and never touches storage itself.

use crate::server::{error::validation::ValidationError, model::db::TrainModel};

/// Capacity of a train as needed to validate a seat reservation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainCapacity {
    /// Number of cargos
    pub cargo_num: i32,
    /// Seats per cargo
    pub places_in_cargo: i32,
}

impl TrainCapacity {
    /// Checks that `seat` and `cargo` exist on the train.
    ///
    /// The seat is checked before the cargo, so a request with both out of range reports the
    /// seat.
    ///
    /// # Returns
    /// - `Ok(())` - Both values are in range
    /// - `Err(ValidationError::SeatOutOfRange)` - Seat outside `[1, places_in_cargo]`
    /// - `Err(ValidationError::CargoOutOfRange)` - Cargo outside `[1, cargo_num]`
    pub fn check(&self, cargo: i32, seat: i32) -> Result<(), ValidationError> {
        if !(1..=self.places_in_cargo).contains(&seat) {
            return Err(ValidationError::SeatOutOfRange {
                seat,
                places_in_cargo: self.places_in_cargo,
            });
        }

        if !(1..=self.cargo_num).contains(&cargo) {
            return Err(ValidationError::CargoOutOfRange {
                cargo,
                cargo_num: self.cargo_num,
            });
        }

        Ok(())
    }
}

impl From<&TrainModel> for TrainCapacity {
    fn from(train: &TrainModel) -> Self {
        Self {
            cargo_num: train.cargo_num,
            places_in_cargo: train.places_in_cargo,
        }
    }
}
