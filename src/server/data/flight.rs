use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QueryResult, QuerySelect, QueryTrait,
};

use crate::server::{
    data::scan::{collect_records, ScanRow},
    model::flight::Flight,
};

impl ScanRow for Flight {
    fn scan_row(row: &QueryResult) -> Result<Self, DbErr> {
        Ok(Self {
            id: row.try_get("", "flight_id")?,
            number: row.try_get("", "flight_no")?,
        })
    }
}

pub struct FlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the flights departing from an airport, ordered by flight ID
    ///
    /// An airport with no departures, or an unknown airport code, yields an empty list.
    pub async fn get_by_departure_airport(&self, airport_code: &str) -> Result<Vec<Flight>, DbErr> {
        let stmt = entity::prelude::Flight::find()
            .select_only()
            .column(entity::flight::Column::FlightId)
            .column(entity::flight::Column::FlightNo)
            .filter(entity::flight::Column::DepartureAirport.eq(airport_code))
            .order_by_asc(entity::flight::Column::FlightId)
            .build(self.db.get_database_backend());

        let rows = self.db.query_all_raw(stmt).await?;

        Ok(collect_records("flights", rows))
    }
}
