use axum::{
    extract::{Query, State},
    response::IntoResponse,
};

use crate::{
    model::flight::FlightsPageDto,
    server::{
        error::AppError, service::flight::FlightService, state::AppState,
        template::FLIGHTS_TEMPLATE,
    },
};

/// Returns the first value of `key` in a decoded query string.
///
/// Later repeats of the key are ignored.
fn first_param(params: Vec<(String, String)>, key: &str) -> Option<String> {
    params
        .into_iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value)
}

/// List the flights departing from an airport.
///
/// # Arguments
/// - `params` - Query string pairs; the first `airport` is the departure airport code
///   and is required
///
/// # Returns
/// - `200 OK` - Rendered flight list, empty if nothing departs from the airport
/// - `400 Bad Request` - First `airport` missing or empty
/// - `500 Internal Server Error` - Database error
pub async fn get_flights(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let airport_code = first_param(params, "airport")
        .filter(|code| !code.is_empty())
        .ok_or_else(|| AppError::BadRequest("Airport code required".to_string()))?;

    let service = FlightService::new(&state.db);

    let flights = service.get_by_departure_airport(&airport_code).await?;

    let page = FlightsPageDto {
        airport_code,
        flights: flights.into_iter().map(|f| f.into_dto()).collect(),
    };

    state.templates.render(FLIGHTS_TEMPLATE, &page)
}
