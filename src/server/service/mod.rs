//! Business logic between the page controllers and the repositories.
//!
//! Services translate repository errors into `AppError` and host the seat calculation:
//! [`seat::SeatService`] computes one aircraft's seat sum and
//! [`aircraft::AircraftService`] fans that work out across every aircraft.

pub mod aircraft;
pub mod airport;
pub mod flight;
pub mod seat;

#[cfg(test)]
mod test;
