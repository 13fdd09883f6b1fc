//! `ruralmarket-listing`
//!
//! **Responsibility:** keyword-driven listing synthesis.
//!
//! Turns a product name and free-text details into a marketplace listing
//! (title, description, hashtags, price). Everything here is deterministic
//! except the price variation, which is drawn from an injectable
//! [`PriceSource`]:
//! - no IO, no HTTP, no storage
//! - no state carried between calls
//! - the uploaded image is carried alongside, never inspected

pub mod description;
pub mod generator;
pub mod hashtags;
pub mod input;
pub mod keywords;
pub mod listing;
pub mod price;
pub mod title;

pub use description::generate_description;
pub use generator::{ListingGenerator, generate_listing};
pub use hashtags::{MAX_HASHTAGS, generate_hashtags};
pub use input::{EMPTY_NAME_MESSAGE, ProductInput};
pub use listing::{EXPORT_FILE_NAME, GeneratedListing};
pub use price::{FixedPriceSource, PriceSource, RandomPriceSource, base_price, format_price, generate_price};
pub use title::{FALLBACK_TITLE, generate_title};
