//! `hyperwalk.toml`: the shared viewer settings plus CLI-only ones.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use hyperwalk::ViewerConfig;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "hyperwalk.toml";
pub const DEFAULT_API_ROOT: &str = "http://localhost:8000/api/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    #[serde(flatten)]
    pub viewer: ViewerConfig,
    pub timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            viewer: ViewerConfig::default().with_api_root(DEFAULT_API_ROOT),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CliConfig {
    /// Read `path`, or `hyperwalk.toml` when it exists, then apply the
    /// `--api-root` override.
    pub fn load(path: Option<&Path>, api_root: Option<String>) -> Result<Self> {
        let path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|path| path.exists()),
        };
        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                log::info!("using config {}", path.display());
                Self::parse(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => Self::default(),
        };
        if let Some(api_root) = api_root {
            config.viewer.api_root = api_root;
        }
        config.viewer.validate()?;
        if config.timeout_secs == 0 {
            bail!("`timeout_secs` must be at least 1");
        }
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
