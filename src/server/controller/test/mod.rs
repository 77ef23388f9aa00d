use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState, template::Templates};


/// Builds the full application router over the given test database.
fn app(db: &DatabaseConnection) -> Router {
    let templates = Templates::load(concat!(env!("CARGO_MANIFEST_DIR"), "/templates")).unwrap();

    router().with_state(AppState::new(db.clone(), templates))
}

/// Issues a GET request and returns the status and body text.
async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}
