//! Backend location.
//!
//! The collection URL comes from `TODO_BACKEND_URL` when it is set to a
//! non-blank value and falls back to [`DEFAULT_BASE_URL`] otherwise.

use std::env;

pub const BACKEND_URL_ENV: &str = "TODO_BACKEND_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/todos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BACKEND_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:5000/api/todos");
    }

    #[test]
    fn override_wins() {
        let config = ClientConfig::from_lookup(|name| {
            (name == BACKEND_URL_ENV).then(|| "https://todos.example.com/api/todos".to_string())
        });
        assert_eq!(config.base_url, "https://todos.example.com/api/todos");
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = ClientConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
