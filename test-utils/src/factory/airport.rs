//! Airport factory for creating test airport rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airports with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::airport::AirportFactory;
///
/// let airport = AirportFactory::new(&db)
///     .code("LED")
///     .name("Pulkovo Airport")
///     .build()
///     .await?;
/// ```
pub struct AirportFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    name: String,
}

impl<'a> AirportFactory<'a> {
    /// Creates a new AirportFactory with default values.
    ///
    /// Defaults:
    /// - code: `"A{id}"` where id is auto-incremented
    /// - name: `"Airport {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("A{}", id),
            name: format!("Airport {}", id),
        }
    }

    /// Sets the airport code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the airport display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Inserts the airport into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created airport entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::airport::Model, DbErr> {
        entity::airport::ActiveModel {
            airport_code: ActiveValue::Set(self.code),
            airport_name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airport with default values.
pub async fn create_airport(db: &DatabaseConnection) -> Result<entity::airport::Model, DbErr> {
    AirportFactory::new(db).build().await
}
