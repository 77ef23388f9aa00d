//! Page DTOs handed to the template renderer.
//!
//! Each page template receives exactly one of the `*PageDto` structs as its context;
//! field names here are the variable names the templates use.

pub mod aircraft;
pub mod airport;
pub mod flight;
