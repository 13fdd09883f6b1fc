use serde::{Deserialize, Serialize};

use ruralmarket_core::{DomainError, DomainResult, ValueObject};

/// Message shown to the seller when the product name is blank.
pub const EMPTY_NAME_MESSAGE: &str = "Please enter a product name";

/// What the seller typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Missing means empty; `validate` reports it like any blank name.
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_details: String,
    /// Photo as supplied by the client (usually a data URL). Never inspected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_image: Option<String>,
}

impl ProductInput {
    pub fn new(product_name: impl Into<String>, product_details: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            product_details: product_details.into(),
            uploaded_image: None,
        }
    }

    pub fn with_uploaded_image(mut self, image: impl Into<String>) -> Self {
        self.uploaded_image = Some(image.into());
        self
    }

    /// Caller-side precondition: the name must contain something besides whitespace.
    ///
    /// The generator itself accepts any strings; this check belongs to whoever
    /// decides whether to invoke it.
    pub fn validate(&self) -> DomainResult<()> {
        if self.product_name.trim().is_empty() {
            return Err(DomainError::validation(EMPTY_NAME_MESSAGE));
        }
        Ok(())
    }
}

impl ValueObject for ProductInput {}
