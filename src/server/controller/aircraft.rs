use axum::{extract::State, response::IntoResponse};

use crate::{
    model::aircraft::CalculationPageDto,
    server::{
        error::AppError,
        service::aircraft::AircraftService,
        state::AppState,
        template::{AIRCRAFTS_TEMPLATE, RESULTS_TEMPLATE},
    },
};

/// Show the aircraft page with the link that starts a calculation.
///
/// # Returns
/// - `200 OK` - Static aircraft page
pub async fn get_aircrafts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.templates.render_static(AIRCRAFTS_TEMPLATE)
}

/// Compute the squared seat sum of every aircraft and show the results.
///
/// Runs one concurrent task per aircraft and waits for all of them before rendering.
/// Seat query failures for individual aircraft show up as a zero square rather than
/// an error.
///
/// # Returns
/// - `200 OK` - Results table with aircraft code, square and elapsed time
/// - `500 Internal Server Error` - The aircraft list could not be fetched
pub async fn calculate(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = AircraftService::new(&state.db);

    let results = service.calculate_all().await?;

    let page = CalculationPageDto {
        results: results.into_iter().map(|r| r.into_dto()).collect(),
    };

    state.templates.render(RESULTS_TEMPLATE, &page)
}
