//! HTTP page handlers.
//!
//! Each handler calls a service, converts the domain models into a page DTO and
//! renders the page's template. Errors are returned as `AppError` and turned into
//! plain-text responses by its `IntoResponse` implementation.

pub mod aircraft;
pub mod airport;
pub mod flight;
pub mod home;

#[cfg(test)]
mod test;
