//! Aircraft factory for creating test aircraft rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test aircraft.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::aircraft::AircraftFactory;
///
/// let aircraft = AircraftFactory::new(&db).code("320").build().await?;
/// ```
pub struct AircraftFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
}

impl<'a> AircraftFactory<'a> {
    /// Creates a new AircraftFactory with default values.
    ///
    /// Defaults:
    /// - code: `"C{id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            code: format!("C{}", next_id()),
        }
    }

    /// Sets the aircraft code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Inserts the aircraft into the database.
    pub async fn build(self) -> Result<entity::aircraft::Model, DbErr> {
        entity::aircraft::ActiveModel {
            aircraft_code: ActiveValue::Set(self.code),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an aircraft with a generated code.
pub async fn create_aircraft(db: &DatabaseConnection) -> Result<entity::aircraft::Model, DbErr> {
    AircraftFactory::new(db).build().await
}
