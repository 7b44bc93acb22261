use serde::Deserialize;

/// Separator inserted between setup and delivery when flattening a two-part joke.
pub const TWOPART_SEPARATOR: &str = " ... ";

/// Fixed user-facing message shown when the provider fetch fails.
///
/// The underlying cause is logged for diagnostics and never surfaced here.
pub const FETCH_FAILED_MESSAGE: &str = "Oops! Failed to fetch a joke.";

/// Fixed user-facing message shown when the custom collection is empty
/// for the active language.
pub const NO_CUSTOM_JOKES_MESSAGE: &str = "No custom jokes available. Add some!";

/// Wire shape of a provider response.
///
/// The provider returns either a one-part joke or a setup/delivery pair,
/// discriminated by the `type` field. Any other shape is a fetch failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RemoteJoke {
    Single { joke: String },
    Twopart { setup: String, delivery: String },
}

impl RemoteJoke {
    /// Flatten into the single string handed to the display surface.
    pub fn into_text(self) -> String {
        match self {
            RemoteJoke::Single { joke } => joke,
            RemoteJoke::Twopart { setup, delivery } => {
                format!("{}{}{}", setup, TWOPART_SEPARATOR, delivery)
            }
        }
    }
}

/// Outcome of a joke request.
///
/// `FetchFailed` and `NoCustomJokes` are recovered states, not errors: both
/// carry a fixed placeholder message and the display surface stays usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JokeResult {
    /// A joke was resolved, remotely or from the custom collection.
    Delivered(String),
    /// Network/provider error or malformed response.
    FetchFailed,
    /// The custom collection is empty for the active language.
    NoCustomJokes,
}

impl JokeResult {
    /// The text to render for this result.
    pub fn display_text(&self) -> &str {
        match self {
            JokeResult::Delivered(text) => text,
            JokeResult::FetchFailed => FETCH_FAILED_MESSAGE,
            JokeResult::NoCustomJokes => NO_CUSTOM_JOKES_MESSAGE,
        }
    }

    /// Whether this result carries an actual joke.
    pub fn is_delivered(&self) -> bool {
        matches!(self, JokeResult::Delivered(_))
    }
}
