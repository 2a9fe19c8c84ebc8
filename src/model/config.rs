use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from taskdeck.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the task collection. Item paths are `<base_url><id>/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. There is no retry; a timed-out action is
    /// simply re-triggered by the user.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api/tasks/".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub show_key_hints: bool,
    /// Theme color overrides, e.g. `highlight = "#FB4196"`.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_gets_defaults() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api/tasks/");
        assert_eq!(config.api.timeout_secs, 10);
        assert!(!config.ui.show_key_hints);
    }

    #[test]
    fn test_partial_api_section_keeps_other_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"[api]
base_url = "https://tasks.example.net/api/tasks/"
"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://tasks.example.net/api/tasks/");
        assert_eq!(config.api.timeout_secs, 10);
    }
}
