use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryResult,
    QuerySelect, QueryTrait,
};

use crate::server::data::scan::{collect_records, ScanRow};

/// Raw seat number as stored, e.g. `12A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatNumber(pub String);

impl ScanRow for SeatNumber {
    fn scan_row(row: &QueryResult) -> Result<Self, DbErr> {
        Ok(Self(row.try_get("", "seat_no")?))
    }
}

pub struct SeatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the seat numbers of an aircraft in no particular order
    pub async fn get_seat_numbers_by_aircraft(
        &self,
        aircraft_code: &str,
    ) -> Result<Vec<String>, DbErr> {
        let stmt = entity::prelude::Seat::find()
            .select_only()
            .column(entity::seat::Column::SeatNo)
            .filter(entity::seat::Column::AircraftCode.eq(aircraft_code))
            .build(self.db.get_database_backend());

        let rows = self.db.query_all_raw(stmt).await?;

        Ok(collect_records::<SeatNumber>("seats", rows)
            .into_iter()
            .map(|SeatNumber(seat_no)| seat_no)
            .collect())
    }
}
