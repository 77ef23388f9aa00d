use crate::server::util::seat::parse_seat_number;

/// Sum of an aircraft's seat numbers and its square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeatSum {
    pub sum: i64,
    pub square: i64,
}

impl SeatSum {
    /// Reduces seat numbers to their numeric sum.
    ///
    /// Seat numbers that do not parse contribute zero. The square saturates at
    /// `i64::MAX` rather than overflowing.
    pub fn from_seat_numbers<I, S>(seat_numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sum = seat_numbers
            .into_iter()
            .map(|seat_no| {
                let seat_no = seat_no.as_ref();
                parse_seat_number(seat_no).unwrap_or_else(|| {
                    tracing::debug!("Seat number '{}' is not numeric, counting as 0", seat_no);
                    0
                })
            })
            .fold(0i64, i64::saturating_add);

        Self {
            sum,
            square: sum.saturating_mul(sum),
        }
    }
}
