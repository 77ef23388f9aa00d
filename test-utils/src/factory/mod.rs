//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting bookings rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let airport = factory::airport::create_airport(&db).await?;
//!     let flight = factory::flight::create_flight(&db, &airport.airport_code).await?;
//!
//!     // Create an aircraft together with its seat map
//!     let (aircraft, seats) =
//!         factory::helpers::create_aircraft_with_seats(&db, &["1A", "1B", "2A"]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let airport = factory::airport::AirportFactory::new(&db)
//!     .code("SVO")
//!     .name("Sheremetyevo International Airport")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `airport` - Create airport rows
//! - `flight` - Create flight rows departing from an airport
//! - `aircraft` - Create aircraft rows
//! - `seat` - Create seat rows for an aircraft
//! - `helpers` - Unique ID generation and multi-row helpers

pub mod aircraft;
pub mod airport;
pub mod flight;
pub mod helpers;
pub mod seat;

// Re-export commonly used factory functions for concise usage
pub use aircraft::create_aircraft;
pub use airport::create_airport;
pub use flight::create_flight;
pub use seat::create_seat;
