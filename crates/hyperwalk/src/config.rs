//! Viewer configuration shared by the browser and CLI front-ends.

use serde::Deserialize;

use crate::history::DEFAULT_ADDRESS_PREFIX;

pub const DEFAULT_API_ROOT: &str = "/api/";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("`{key}` must not be empty")]
    Empty { key: &'static str },
    /// Back/forward reads the location from the URL fragment only.
    #[error("`address_prefix` must start with `#`, got {prefix:?}")]
    AddressPrefix { prefix: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Entry point queried once for the navigation menu.
    pub api_root: String,
    /// Prepended to a location when it is pushed to history.
    pub address_prefix: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            address_prefix: DEFAULT_ADDRESS_PREFIX.to_string(),
        }
    }
}

impl ViewerConfig {
    /// Defaults, with the entry point taken from `HYPERWALK_API_ROOT` at build
    /// time when it is set.
    pub fn from_build_env() -> Self {
        match option_env!("HYPERWALK_API_ROOT") {
            Some(api_root) if !api_root.is_empty() => Self::default().with_api_root(api_root),
            _ => Self::default(),
        }
    }

    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_root.trim().is_empty() {
            return Err(ConfigError::Empty { key: "api_root" });
        }
        if !self.address_prefix.starts_with('#') {
            return Err(ConfigError::AddressPrefix {
                prefix: self.address_prefix.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: ViewerConfig = serde_json::from_str(r#"{"api_root": "/v2/"}"#).unwrap();
        assert_eq!(config.api_root, "/v2/");
        assert_eq!(config.address_prefix, "#");
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn empty_api_root_is_rejected() {
        let config = ViewerConfig::default().with_api_root("  ");
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "`api_root` must not be empty"
        );
    }

    #[test]
    fn address_prefix_must_be_a_fragment() {
        let mut config = ViewerConfig::default();
        config.address_prefix = "/view".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::AddressPrefix {
                prefix: "/view".to_string()
            })
        );

        config.address_prefix = String::new();
        assert!(config.validate().is_err());

        config.address_prefix = "#!".to_string();
        assert_eq!(config.validate(), Ok(()));
    }
}
