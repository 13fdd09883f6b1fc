use axum::Router;

pub mod listings;
pub mod system;

/// Router for listing endpoints.
pub fn router() -> Router {
    Router::new().nest("/listings", listings::router())
}
