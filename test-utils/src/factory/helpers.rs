//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependent rows.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an aircraft with a generated code and one seat row per entry in `seat_numbers`.
///
/// # Arguments
/// - `db` - Database connection
/// - `seat_numbers` - Seat numbers to insert for the aircraft, e.g. `["1A", "1B"]`
///
/// # Returns
/// - `Ok((aircraft, seats))` - The created aircraft and its seats in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_aircraft_with_seats(
    db: &DatabaseConnection,
    seat_numbers: &[&str],
) -> Result<(entity::aircraft::Model, Vec<entity::seat::Model>), DbErr> {
    let aircraft = crate::factory::aircraft::create_aircraft(db).await?;
    let seats = crate::factory::seat::create_seats(db, &aircraft.aircraft_code, seat_numbers).await?;

    Ok((aircraft, seats))
}

/// Creates an airport together with `count` flights departing from it.
///
/// # Returns
/// - `Ok((airport, flights))` - The created airport and its departing flights
/// - `Err(DbErr)` - Database error during creation
pub async fn create_airport_with_flights(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::airport::Model, Vec<entity::flight::Model>), DbErr> {
    let airport = crate::factory::airport::create_airport(db).await?;

    let mut flights = Vec::with_capacity(count);
    for _ in 0..count {
        flights.push(crate::factory::flight::create_flight(db, &airport.airport_code).await?);
    }

    Ok((airport, flights))
}
