use crate::keywords::{KeywordRule, SearchText, matched_values};

/// Upper bound on the number of hashtags in a listing.
pub const MAX_HASHTAGS: usize = 8;

const OPENING_TAGS: [&str; 2] = ["#handmade", "#localproduct"];
const CLOSING_TAGS: [&str; 2] = ["#ruralmarket", "#supportlocal"];

const TAG_RULES: [KeywordRule<[&str; 2]>; 4] = [
    KeywordRule::new(&["organic", "natural"], ["#organic", "#natural"]),
    KeywordRule::new(&["handmade", "craft"], ["#artisan", "#crafted"]),
    KeywordRule::new(&["fresh", "farm"], ["#fresh", "#farmtotable"]),
    KeywordRule::new(&["sarawak", "sabah", "malaysia"], ["#sarawak", "#malaysia"]),
];

/// Build the hashtag list for a listing.
///
/// Construction order is opening tags, matched pairs, closing tags; the
/// result is then cut to [`MAX_HASHTAGS`]. With three or more matched pairs
/// the closing tags fall off the end. Duplicates are not removed.
pub fn generate_hashtags(name: &str, details: &str) -> Vec<String> {
    let keywords = SearchText::combined(name, details);

    OPENING_TAGS
        .into_iter()
        .chain(matched_values(&TAG_RULES, &keywords).into_iter().flatten())
        .chain(CLOSING_TAGS)
        .take(MAX_HASHTAGS)
        .map(str::to_string)
        .collect()
}
