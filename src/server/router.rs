use axum::{http::StatusCode, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::{
        aircraft::{calculate, get_aircrafts},
        airport::get_airports,
        flight::get_flights,
        home::home,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/airports", get(get_airports))
        .route("/flights", get(get_flights))
        .route("/aircrafts", get(get_aircrafts))
        .route("/aircrafts/calculate", get(calculate))
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not found") })
        .layer(TraceLayer::new_for_http())
}
