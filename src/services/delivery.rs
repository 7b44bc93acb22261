use crate::models::{Category, JokeResult, RemoteJoke, SelectionState};
use crate::store::JokeStore;
use rand::Rng;
use std::time::Duration;
use thiserror::Error;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors from the provider fetch path.
///
/// These never reach the user: `request_joke` logs them and degrades to
/// [`JokeResult::FetchFailed`] with its fixed placeholder message.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("provider returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// Service that resolves "give me a joke" requests.
///
/// Two paths: the `custom` category samples uniformly from the store's
/// custom collection for the active language; everything else is one
/// asynchronous GET against the remote provider. Either way the caller gets
/// a [`JokeResult`], never an error — failures degrade to placeholder
/// results.
///
/// Requests are independent: concurrent invocations are not coalesced or
/// cancelled, and whichever completes last wins the display surface.
pub struct DeliveryService {
    http: reqwest::Client,
    base_url: String,
}

impl DeliveryService {
    /// Create a delivery service pointed at `base_url`
    /// (e.g. `https://v2.jokeapi.dev`).
    ///
    /// Timeouts are transport-level only; the delivery flow adds none of
    /// its own.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Resolve a joke for the given selection.
    ///
    /// The random source is injected so custom-category sampling is
    /// deterministic under test; each stored entry is equally likely.
    pub async fn request_joke(
        &self,
        selection: &SelectionState,
        store: &JokeStore,
        rng: &mut impl Rng,
    ) -> JokeResult {
        match &selection.category {
            Category::Custom => {
                let jokes = store.custom_for(&selection.language);
                if jokes.is_empty() {
                    tracing::debug!(
                        "No custom jokes stored for language '{}'",
                        selection.language
                    );
                    return JokeResult::NoCustomJokes;
                }
                let index = rng.random_range(0..jokes.len());
                JokeResult::Delivered(jokes[index].clone())
            }
            Category::Provider(name) => {
                match self.fetch_remote(name, &selection.language).await {
                    Ok(text) => JokeResult::Delivered(text),
                    Err(e) => {
                        tracing::warn!("Joke fetch failed: {}", e);
                        JokeResult::FetchFailed
                    }
                }
            }
        }
    }

    /// One GET against the provider: category as path segment, language as
    /// query parameter.
    async fn fetch_remote(&self, category: &str, language: &str) -> Result<String, FetchError> {
        let url = format!("{}/joke/{}?lang={}", self.base_url, category, language);
        tracing::debug!("Fetching joke from {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        parse_provider_response(&body)
    }
}

/// Interpret a provider response body. Pure for testability.
///
/// Two-part jokes are flattened with the fixed `" ... "` separator; any
/// shape other than the two documented ones is malformed.
pub fn parse_provider_response(body: &str) -> Result<String, FetchError> {
    let joke: RemoteJoke =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    Ok(joke.into_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_response() {
        let body = r#"{"type": "single", "joke": "A short joke."}"#;
        assert_eq!(parse_provider_response(body).unwrap(), "A short joke.");
    }

    #[test]
    fn test_parse_twopart_response_uses_fixed_separator() {
        let body = r#"{"type": "twopart", "setup": "Why?", "delivery": "Because."}"#;
        assert_eq!(parse_provider_response(body).unwrap(), "Why? ... Because.");
    }

    #[test]
    fn test_parse_provider_error_body_is_malformed() {
        // Provider error payloads have no `type` discriminant
        let body = r#"{"error": true, "message": "No matching joke found"}"#;
        assert!(matches!(
            parse_provider_response(body),
            Err(FetchError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_non_json_is_malformed() {
        assert!(matches!(
            parse_provider_response("<html>oops</html>"),
            Err(FetchError::Malformed(_))
        ));
    }
}
