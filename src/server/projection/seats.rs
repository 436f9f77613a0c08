//! Taken-seats projection of a journey.

use std::collections::BTreeMap;

use crate::model::journey::TakenSeatsDto;

/// Groups occupied `(cargo, seat)` pairs by cargo.
///
/// Groups come out in ascending cargo order and each group lists its seats ascending, joined
/// by `", "`. Input order does not matter.
pub fn taken_seats<I>(tickets: I) -> Vec<TakenSeatsDto>
where
    I: IntoIterator<Item = (i32, i32)>,
{
    let mut by_cargo: BTreeMap<i32, Vec<i32>> = BTreeMap::new();

    for (cargo, seat) in tickets {
        by_cargo.entry(cargo).or_default().push(seat);
    }

    by_cargo
        .into_iter()
        .map(|(cargo, mut seats)| {
            seats.sort_unstable();

            TakenSeatsDto {
                cargo,
                seat: seats
                    .iter()
                    .map(i32::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })
        .collect()
}
