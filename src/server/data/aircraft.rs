use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QueryResult, QuerySelect,
    QueryTrait,
};

use crate::server::{
    data::scan::{collect_records, ScanRow},
    model::aircraft::Aircraft,
};

impl ScanRow for Aircraft {
    fn scan_row(row: &QueryResult) -> Result<Self, DbErr> {
        Ok(Self {
            code: row.try_get("", "aircraft_code")?,
        })
    }
}

pub struct AircraftRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every aircraft ordered by code
    pub async fn get_all(&self) -> Result<Vec<Aircraft>, DbErr> {
        let stmt = entity::prelude::Aircraft::find()
            .select_only()
            .column(entity::aircraft::Column::AircraftCode)
            .order_by_asc(entity::aircraft::Column::AircraftCode)
            .build(self.db.get_database_backend());

        let rows = self.db.query_all_raw(stmt).await?;

        Ok(collect_records("aircrafts_data", rows))
    }
}
