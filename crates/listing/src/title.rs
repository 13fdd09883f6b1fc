use crate::keywords::{KeywordRule, SearchText, matched_values};

/// Title used when no product name is available.
pub const FALLBACK_TITLE: &str = "Premium Quality Product - Fresh & Natural";

const DEFAULT_ADJECTIVE: &str = "Quality";
const TITLE_SUFFIX: &str = "Locally Sourced";

const ADJECTIVE_RULES: [KeywordRule<&str>; 4] = [
    KeywordRule::new(&["fresh", "organic"], "Fresh"),
    KeywordRule::new(&["handmade", "craft"], "Handcrafted"),
    KeywordRule::new(&["natural", "pure"], "Natural"),
    KeywordRule::new(&["premium", "quality"], "Premium"),
];

/// Build the listing title.
///
/// Only `details` is scanned for adjectives; the name keeps its casing.
/// A blank name (empty or whitespace) yields [`FALLBACK_TITLE`].
pub fn generate_title(name: &str, details: &str) -> String {
    // Trimmed on purpose: a whitespace-only name would otherwise render as
    // "Quality    - Locally Sourced". The description checks for "" only.
    if name.trim().is_empty() {
        return FALLBACK_TITLE.to_string();
    }

    let keywords = SearchText::new(details);
    let mut adjectives = matched_values(&ADJECTIVE_RULES, &keywords);
    if adjectives.is_empty() {
        adjectives.push(DEFAULT_ADJECTIVE);
    }

    format!("{} {name} - {TITLE_SUFFIX}", adjectives.join(" "))
}
