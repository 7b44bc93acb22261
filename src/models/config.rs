use serde::{Deserialize, Serialize};

/// User configuration from Jokebox Config.yaml
///
/// Contains the provider endpoint and the default selection applied at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(rename = "Jokebox_Settings")]
    pub settings: JokeboxSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JokeboxSettings {
    #[serde(rename = "Provider URL", default = "default_provider_url")]
    pub provider_url: String,

    #[serde(rename = "Default Language", default = "default_language")]
    pub default_language: String,

    #[serde(rename = "Default Category", default = "default_category")]
    pub default_category: String,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,
}

impl Default for JokeboxSettings {
    fn default() -> Self {
        Self {
            provider_url: default_provider_url(),
            default_language: default_language(),
            default_category: default_category(),
            debug_mode: false,
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            settings: JokeboxSettings::default(),
        }
    }
}

fn default_provider_url() -> String {
    "https://v2.jokeapi.dev".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_category() -> String {
    "any".to_string()
}
