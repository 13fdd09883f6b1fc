use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};

use ruralmarket_listing::EXPORT_FILE_NAME;

use crate::app::dto::{ExportListingRequest, GenerateListingRequest, ListingResponse, ProgressResponse};
use crate::app::errors;
use crate::app::progress::{progress_schedule, step_interval};
use crate::app::services::ListingService;

pub fn router() -> Router {
    Router::new()
        .route("/", post(generate_listing))
        .route("/export", post(export_listing))
        .route("/progress", get(progress))
}

pub async fn generate_listing(
    Extension(services): Extension<Arc<ListingService>>,
    payload: Result<Json<GenerateListingRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let listing = match services.generate(&body).await {
        Ok(listing) => listing,
        Err(e) => {
            tracing::warn!(error = %e, "listing request rejected");
            return errors::domain_error_to_response(e);
        }
    };

    tracing::info!(
        title = %listing.title,
        price = %listing.price,
        has_image = body.uploaded_image.is_some(),
        "listing generated"
    );

    (
        StatusCode::OK,
        Json(ListingResponse::new(listing, body.uploaded_image)),
    )
        .into_response()
}

/// Render a listing the client already holds as the plain-text download.
///
/// The body is the `/listings` response; nothing is regenerated, so the file
/// carries the same price the seller was shown.
pub async fn export_listing(
    payload: Result<Json<ExportListingRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(listing) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let disposition = format!("attachment; filename=\"{EXPORT_FILE_NAME}\"");
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        listing.to_export_text(),
    )
        .into_response()
}

pub async fn progress(Extension(services): Extension<Arc<ListingService>>) -> impl IntoResponse {
    let total = services.generation_delay();
    Json(ProgressResponse {
        interval_ms: step_interval(total).as_millis() as u64,
        total_ms: total.as_millis() as u64,
        steps: progress_schedule(total),
    })
}
