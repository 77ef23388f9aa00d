/// Parses the numeric part of a seat number.
///
/// Seat numbers are a row number followed by a single seat letter, e.g. `12A`. Exactly
/// the final character is dropped and the rest is parsed as an integer.
///
/// # Arguments
/// - `seat_no` - Seat number as stored in the seats table
///
/// # Returns
/// - `Some(i64)` - The row number
/// - `None` - The seat number is empty or its prefix is not an integer
pub fn parse_seat_number(seat_no: &str) -> Option<i64> {
    let mut chars = seat_no.chars();
    chars.next_back()?;

    chars.as_str().parse::<i64>().ok()
}
