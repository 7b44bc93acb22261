use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Reserved category name that routes requests to the local custom collection.
pub const CUSTOM_CATEGORY: &str = "custom";

/// Provider language codes are two-letter ISO 639-1, with a few three-letter
/// aliases accepted.
static LANGUAGE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}$").expect("hardcoded regex must compile"));

/// Check a language code at the presentation boundary before it reaches
/// the store or the provider.
pub fn is_valid_language_code(code: &str) -> bool {
    LANGUAGE_CODE.is_match(code)
}

/// The active joke category.
///
/// Provider categories are an open set (whatever the provider accepts as a
/// path segment); `custom` is the one reserved sentinel and never leaves
/// the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    /// Sample from the locally stored custom jokes.
    Custom,
    /// A provider category name, passed through as the request path segment.
    Provider(String),
}

impl Category {
    /// Parse a user-supplied category name. `custom` (any case) is the
    /// sentinel; everything else is forwarded to the provider verbatim.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case(CUSTOM_CATEGORY) {
            Category::Custom
        } else {
            Category::Provider(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Custom => CUSTOM_CATEGORY,
            Category::Provider(name) => name,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Provider("any".to_string())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current language/category filter applied to joke requests.
///
/// Transient and in-memory only; changed by explicit selection events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub language: String,
    pub category: Category,
}

impl SelectionState {
    pub fn new(language: impl Into<String>, category: Category) -> Self {
        Self {
            language: language.into(),
            category,
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            category: Category::default(),
        }
    }
}
