use sea_orm::DatabaseConnection;

use crate::server::{data::flight::FlightRepository, error::AppError, model::flight::Flight};

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the flights departing from the given airport
    pub async fn get_by_departure_airport(
        &self,
        airport_code: &str,
    ) -> Result<Vec<Flight>, AppError> {
        let repo = FlightRepository::new(self.db);

        Ok(repo.get_by_departure_airport(airport_code).await?)
    }
}
