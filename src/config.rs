use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{Error, Result};
use crate::core::pmp::NapotDecode;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub pmp: PmpConfig,
}

impl Config {
    /// Reads and parses a TOML settings file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Settings(format!("{}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    /// Parses TOML settings text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Settings(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_trace")]
    pub trace: bool,

    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: default_trace(),
            output: OutputFormat::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Deserialize)]
pub struct PmpConfig {
    #[serde(default)]
    pub napot_decode: NapotDecode,
}

fn default_trace() -> bool {
    cfg!(feature = "always-trace")
}
