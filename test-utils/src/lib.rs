//! Airboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the airboard
//! server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases holding the bookings tables, plus factories for seeding them.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting airports, flights, aircraft and seats
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_airports() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_bookings_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     factory::airport::create_airport(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
