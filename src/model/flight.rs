use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FlightDto {
    pub id: i32,
    pub number: String,
}

/// Context for `flights.html`.
#[derive(Debug, Serialize)]
pub struct FlightsPageDto {
    /// Departure airport the list is filtered by.
    pub airport_code: String,
    pub flights: Vec<FlightDto>,
}
