use serde::Serialize;

use ruralmarket_listing::{GeneratedListing, ProductInput};

use crate::app::progress::ProgressStep;

/// Request body for generation: the form fields.
pub type GenerateListingRequest = ProductInput;

/// Request body for export: a previously returned listing. Extra fields
/// such as `uploadedImage` are ignored.
pub type ExportListingRequest = GeneratedListing;

/// A generated listing plus the untouched photo the client sent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    #[serde(flatten)]
    pub listing: GeneratedListing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_image: Option<String>,
}

impl ListingResponse {
    pub fn new(listing: GeneratedListing, uploaded_image: Option<String>) -> Self {
        Self {
            listing,
            uploaded_image,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub interval_ms: u64,
    pub total_ms: u64,
    pub steps: Vec<ProgressStep>,
}
