use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

/// Redirect the site root to the airport list.
///
/// # Returns
/// - `302 Found` - `Location: /airports`
pub async fn home() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/airports")])
}
