//! Flight factory for creating test flight rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights departing from a given airport.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::flight::FlightFactory;
///
/// let flight = FlightFactory::new(&db, "SVO")
///     .number("PG0403")
///     .build()
///     .await?;
/// ```
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    number: String,
    departure_airport: String,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - number: `"PG{id:04}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `departure_airport` - Code of the airport the flight departs from
    pub fn new(db: &'a DatabaseConnection, departure_airport: &str) -> Self {
        let id = next_id();
        Self {
            db,
            id: id as i32,
            number: format!("PG{:04}", id),
            departure_airport: departure_airport.to_string(),
        }
    }

    /// Sets the flight ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the flight number.
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Inserts the flight into the database.
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            flight_id: ActiveValue::Set(self.id),
            flight_no: ActiveValue::Set(self.number),
            departure_airport: ActiveValue::Set(self.departure_airport),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight with default values departing from `departure_airport`.
pub async fn create_flight(
    db: &DatabaseConnection,
    departure_airport: &str,
) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db, departure_airport).build().await
}
