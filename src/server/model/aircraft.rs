//! Aircraft domain models and per-aircraft calculation results.

use std::time::Duration;

use crate::model::aircraft::AircraftResultDto;

/// An aircraft enumerated for the seat calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aircraft {
    /// Aircraft code such as `320` or `SU9`.
    pub code: String,
}

/// Outcome of the seat calculation for a single aircraft.
///
/// Built fresh for every calculation request and dropped once the page is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AircraftResult {
    /// Code of the aircraft this result belongs to.
    pub aircraft_code: String,
    /// Sum of the aircraft's seat numbers, squared.
    pub square: i64,
    /// Wall-clock time spent computing this result, including the seat query.
    pub elapsed: Duration,
}

impl AircraftResult {
    /// Converts the result into its template DTO.
    ///
    /// The elapsed time is rendered with `Duration`'s debug format, e.g. `1.234567ms`.
    pub fn into_dto(self) -> AircraftResultDto {
        AircraftResultDto {
            aircraft_code: self.aircraft_code,
            square: self.square,
            elapsed: format!("{:?}", self.elapsed),
        }
    }
}
