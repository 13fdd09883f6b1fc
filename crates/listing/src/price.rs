//! Keyword-based price estimation.
//!
//! The base is a pure function of the text; the final price adds a
//! variation in `0..=MAX_VARIATION` drawn from a [`PriceSource`].

use crate::keywords::{KeywordRule, SearchText, matched_values};

/// Starting price before adjustments, in ringgit.
pub const BASE_PRICE: u32 = 25;

/// Price that replaces the base when the product is sold by weight.
pub const PER_KG_PRICE: u32 = 15;

/// Largest random variation added on top of the base.
pub const MAX_VARIATION: u32 = 9;

const CURRENCY: &str = "RM";

const ADJUSTMENTS: [KeywordRule<u32>; 4] = [
    KeywordRule::new(&["premium", "quality"], 15),
    KeywordRule::new(&["organic", "natural"], 10),
    KeywordRule::new(&["handmade", "craft"], 20),
    KeywordRule::new(&["large", "big"], 10),
];

const PER_KG_TRIGGERS: &[&str] = &["kg", "kilogram"];

/// Source of the random part of a price.
///
/// Implementations must return a value in `0..=MAX_VARIATION`.
pub trait PriceSource {
    fn variation(&mut self) -> u32;
}

/// Uniform variation backed by `fastrand`.
#[derive(Debug, Clone)]
pub struct RandomPriceSource {
    rng: fastrand::Rng,
}

impl RandomPriceSource {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomPriceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceSource for RandomPriceSource {
    fn variation(&mut self) -> u32 {
        self.rng.u32(0..=MAX_VARIATION)
    }
}

/// Always returns the same variation (clamped to `MAX_VARIATION`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPriceSource(u32);

impl FixedPriceSource {
    pub fn new(variation: u32) -> Self {
        Self(variation.min(MAX_VARIATION))
    }
}

impl PriceSource for FixedPriceSource {
    fn variation(&mut self) -> u32 {
        self.0
    }
}

/// Base price for the combined name and details, before variation.
///
/// Adjustments add up independently; a weight keyword then overrides the
/// whole sum with [`PER_KG_PRICE`].
pub fn base_price(name: &str, details: &str) -> u32 {
    let keywords = SearchText::combined(name, details);

    if keywords.contains_any(PER_KG_TRIGGERS) {
        return PER_KG_PRICE;
    }

    BASE_PRICE + matched_values(&ADJUSTMENTS, &keywords).into_iter().sum::<u32>()
}

/// `"RM <amount>.00"`.
pub fn format_price(amount: u32) -> String {
    format!("{CURRENCY} {amount}.00")
}

pub fn generate_price<P: PriceSource + ?Sized>(name: &str, details: &str, source: &mut P) -> String {
    format_price(base_price(name, details) + source.variation())
}
