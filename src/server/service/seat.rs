use sea_orm::DatabaseConnection;

use crate::server::{data::seat::SeatRepository, model::seat::SeatSum};

pub struct SeatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sums the seat numbers of one aircraft and squares the sum.
    ///
    /// The aircraft code is not checked against the aircraft table; an unknown code
    /// simply has no seats. This never fails: if the seat query errors, the failure is
    /// logged and a zero sum is returned so one aircraft cannot abort a calculation
    /// spanning many.
    ///
    /// # Arguments
    /// - `aircraft_code` - Code of the aircraft whose seats are summed
    ///
    /// # Returns
    /// - `SeatSum` - Sum of the parsed seat numbers and its square
    pub async fn sum_seat_numbers(&self, aircraft_code: &str) -> SeatSum {
        let repo = SeatRepository::new(self.db);

        match repo.get_seat_numbers_by_aircraft(aircraft_code).await {
            Ok(seat_numbers) => {
                let seat_sum = SeatSum::from_seat_numbers(seat_numbers);
                tracing::debug!("Aircraft {} seat sum is {}", aircraft_code, seat_sum.sum);
                seat_sum
            }
            Err(e) => {
                tracing::warn!("Seats query failed for aircraft {}: {}", aircraft_code, e);
                SeatSum::default()
            }
        }
    }
}
