use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QueryResult, QuerySelect,
    QueryTrait,
};

use crate::server::{
    data::scan::{collect_records, ScanRow},
    model::airport::Airport,
};

impl ScanRow for Airport {
    fn scan_row(row: &QueryResult) -> Result<Self, DbErr> {
        Ok(Self {
            code: row.try_get("", "airport_code")?,
            name: row.try_get("", "airport_name")?,
        })
    }
}

pub struct AirportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every airport ordered by code
    pub async fn get_all(&self) -> Result<Vec<Airport>, DbErr> {
        let stmt = entity::prelude::Airport::find()
            .select_only()
            .column(entity::airport::Column::AirportCode)
            .column(entity::airport::Column::AirportName)
            .order_by_asc(entity::airport::Column::AirportCode)
            .build(self.db.get_database_backend());

        let rows = self.db.query_all_raw(stmt).await?;

        Ok(collect_records("airports", rows))
    }
}
