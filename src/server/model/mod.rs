//! Server-side domain models.
//!
//! Domain models are produced by the repositories from scanned rows and converted to page
//! DTOs at the controller boundary, keeping SQL column names and template field names
//! apart from the types the services work with.

pub mod aircraft;
pub mod airport;
pub mod flight;
pub mod seat;
