use axum::{extract::State, response::IntoResponse};

use crate::{
    model::airport::AirportsPageDto,
    server::{
        error::AppError, service::airport::AirportService, state::AppState,
        template::AIRPORTS_TEMPLATE,
    },
};

/// List every airport.
///
/// # Returns
/// - `200 OK` - Rendered airport list, possibly empty
/// - `500 Internal Server Error` - Database error
pub async fn get_airports(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = AirportService::new(&state.db);

    let airports = service.get_all().await?;

    let page = AirportsPageDto {
        airports: airports.into_iter().map(|a| a.into_dto()).collect(),
    };

    state.templates.render(AIRPORTS_TEMPLATE, &page)
}
