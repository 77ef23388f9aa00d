//! Seat factory for creating test seat rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a single seat for an aircraft.
///
/// Seats have no generated defaults: the seat number is the value under test in
/// nearly every seat scenario, so callers always supply it.
///
/// # Arguments
/// - `db` - Database connection
/// - `aircraft_code` - Code of the aircraft the seat belongs to
/// - `seat_no` - Seat number such as `"12A"`
pub async fn create_seat(
    db: &DatabaseConnection,
    aircraft_code: &str,
    seat_no: &str,
) -> Result<entity::seat::Model, DbErr> {
    entity::seat::ActiveModel {
        aircraft_code: ActiveValue::Set(aircraft_code.to_string()),
        seat_no: ActiveValue::Set(seat_no.to_string()),
    }
    .insert(db)
    .await
}

/// Creates one seat per entry in `seat_numbers` for the given aircraft.
pub async fn create_seats(
    db: &DatabaseConnection,
    aircraft_code: &str,
    seat_numbers: &[&str],
) -> Result<Vec<entity::seat::Model>, DbErr> {
    let mut seats = Vec::with_capacity(seat_numbers.len());
    for seat_no in seat_numbers {
        seats.push(create_seat(db, aircraft_code, seat_no).await?);
    }

    Ok(seats)
}
