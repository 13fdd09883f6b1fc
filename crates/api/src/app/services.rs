use std::time::Duration;

use ruralmarket_core::DomainResult;
use ruralmarket_listing::{GeneratedListing, ListingGenerator, ProductInput};

/// Wraps the generator with the caller-side precondition and the cosmetic wait.
#[derive(Debug, Clone)]
pub struct ListingService {
    generation_delay: Duration,
}

impl ListingService {
    pub fn new(generation_delay: Duration) -> Self {
        Self { generation_delay }
    }

    pub fn generation_delay(&self) -> Duration {
        self.generation_delay
    }

    /// Validate, wait, generate.
    ///
    /// A blank name is rejected before any waiting so the form can show the
    /// message immediately.
    pub async fn generate(&self, input: &ProductInput) -> DomainResult<GeneratedListing> {
        input.validate()?;

        if !self.generation_delay.is_zero() {
            tokio::time::sleep(self.generation_delay).await;
        }

        // Fresh price source per request; nothing is shared between callers.
        Ok(ListingGenerator::new().generate(input))
    }
}
