use sea_orm::DatabaseConnection;

use crate::server::{data::airport::AirportRepository, error::AppError, model::airport::Airport};

pub struct AirportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every airport
    pub async fn get_all(&self) -> Result<Vec<Airport>, AppError> {
        let repo = AirportRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
