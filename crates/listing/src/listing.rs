use serde::{Deserialize, Serialize};

use ruralmarket_core::ValueObject;

/// Suggested file name for the plain-text download.
pub const EXPORT_FILE_NAME: &str = "product-listing.txt";

/// A synthesized marketplace listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedListing {
    pub title: String,
    pub description: String,
    pub hashtags: Vec<String>,
    /// Formatted as `"RM <integer>.00"`.
    pub price: String,
}

impl GeneratedListing {
    /// Plain-text form used for clipboard copy and download.
    ///
    /// Title, description, space-joined hashtags and `Price: ...`, separated
    /// by blank lines.
    pub fn to_export_text(&self) -> String {
        format!(
            "{}\n\n{}\n\n{}\n\nPrice: {}",
            self.title,
            self.description,
            self.hashtags.join(" "),
            self.price
        )
    }
}

impl ValueObject for GeneratedListing {}
