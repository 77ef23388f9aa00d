use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AirportDto {
    pub code: String,
    pub name: String,
}

/// Context for `airports.html`.
#[derive(Debug, Serialize)]
pub struct AirportsPageDto {
    pub airports: Vec<AirportDto>,
}
