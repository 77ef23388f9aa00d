use serde::Serialize;

/// One row of the calculation results table.
#[derive(Debug, Serialize)]
pub struct AircraftResultDto {
    pub aircraft_code: String,
    pub square: i64,
    /// Human-readable elapsed time, e.g. `1.234567ms`.
    pub elapsed: String,
}

/// Context for `results.html`.
#[derive(Debug, Serialize)]
pub struct CalculationPageDto {
    pub results: Vec<AircraftResultDto>,
}
