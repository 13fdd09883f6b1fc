//! Case-insensitive trigger matching shared by the generators.

/// Lower-cased text that keyword rules are evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchText(String);

impl SearchText {
    pub fn new(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    /// `name + " " + details`, lower-cased. Used by hashtags and pricing.
    pub fn combined(name: &str, details: &str) -> Self {
        Self::new(&format!("{name} {details}"))
    }

    /// Plain substring containment; no word boundaries ("crafty" matches "craft").
    pub fn contains_any(&self, triggers: &[&str]) -> bool {
        triggers.iter().any(|t| self.0.contains(t))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A rule branch: fires when any trigger substring is present.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T> {
    pub triggers: &'static [&'static str],
    pub value: T,
}

impl<T: Copy> KeywordRule<T> {
    pub const fn new(triggers: &'static [&'static str], value: T) -> Self {
        Self { triggers, value }
    }

    pub fn matches(&self, text: &SearchText) -> bool {
        text.contains_any(self.triggers)
    }
}

/// Values of every rule that fires, in rule order (not input order).
pub fn matched_values<T: Copy>(rules: &[KeywordRule<T>], text: &SearchText) -> Vec<T> {
    rules
        .iter()
        .filter(|rule| rule.matches(text))
        .map(|rule| rule.value)
        .collect()
}
