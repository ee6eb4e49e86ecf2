// ============================================================
// Layer 6 — Service Configuration
// ============================================================
// Everything tunable about the service lives in ServiceConfig:
// network settings for the server and fetcher, plus the text
// pipeline settings (markers, terminators, default lengths).
//
// The config is read from / written to JSON with serde_json.
// Every field has a default (#[serde(default)]), so a config
// file only needs the keys it wants to change:
//
//   {
//     "port": 8080,
//     "pipeline": { "preview_len": 1000 }
//   }
//
// CLI flags are applied on top of the loaded file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

use crate::data::pipeline::PipelineConfig;

/// Default config file name used by `init-config`
pub const DEFAULT_CONFIG_FILE: &str = "gutenberg-digest.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Interface the web server binds to
    pub host: String,

    /// Port the web server listens on
    pub port: u16,

    /// Whole-request timeout for downloads
    pub fetch_timeout_secs: u64,

    /// Downloads larger than this are rejected
    pub max_body_bytes: usize,

    /// Only accept URLs whose path ends in ".txt"
    pub require_txt_extension: bool,

    /// User-Agent header sent by the fetcher
    pub user_agent: String,

    pub pipeline: PipelineConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host:                  "127.0.0.1".to_string(),
            port:                  5000,
            fetch_timeout_secs:    10,
            max_body_bytes:        16 * 1024 * 1024,
            require_txt_extension: true,
            user_agent:            concat!("gutenberg-digest/", env!("CARGO_PKG_VERSION")).to_string(),
            pipeline:              PipelineConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load a config file, or return the defaults when `path` is None.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None    => Ok(Self::default()),
        }
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        let cfg: Self = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", path.display()))?;

        tracing::debug!("Loaded config from '{}'", path.display());
        Ok(cfg)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved config to '{}'", path.display());
        Ok(())
    }

    /// "host:port" for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
