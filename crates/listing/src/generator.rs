use crate::description::generate_description;
use crate::hashtags::generate_hashtags;
use crate::input::ProductInput;
use crate::listing::GeneratedListing;
use crate::price::{PriceSource, RandomPriceSource, base_price, format_price};
use crate::title::generate_title;

/// Runs the four generators over one input.
///
/// Holds only the price source; no state survives between calls beyond the
/// source's own RNG position.
#[derive(Debug, Clone)]
pub struct ListingGenerator<P = RandomPriceSource> {
    price_source: P,
}

impl ListingGenerator<RandomPriceSource> {
    pub fn new() -> Self {
        Self::with_price_source(RandomPriceSource::new())
    }
}

impl Default for ListingGenerator<RandomPriceSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PriceSource> ListingGenerator<P> {
    pub fn with_price_source(price_source: P) -> Self {
        Self { price_source }
    }

    /// Synthesize a listing. Never fails; blank names are the caller's concern.
    pub fn generate(&mut self, input: &ProductInput) -> GeneratedListing {
        let name = input.product_name.as_str();
        let details = input.product_details.as_str();

        let base = base_price(name, details);
        let variation = self.price_source.variation();

        let listing = GeneratedListing {
            title: generate_title(name, details),
            description: generate_description(name, details),
            hashtags: generate_hashtags(name, details),
            price: format_price(base + variation),
        };

        tracing::debug!(
            product_name = name,
            base_price = base,
            variation,
            hashtags = listing.hashtags.len(),
            "listing generated"
        );

        listing
    }
}

/// One-shot generation with a fresh random price source.
pub fn generate_listing(input: &ProductInput) -> GeneratedListing {
    ListingGenerator::new().generate(input)
}
