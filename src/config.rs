use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DemoError, Result};
use crate::manufacturer::Manufacturer;

/// Which demos to run. Missing keys fall back to the built-in lineup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub shapes: bool,
    pub phones: bool,
    /// `None` runs the fixed lineup, Nokia then Samsung then HTC.
    pub manufacturers: Option<Vec<Manufacturer>>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            shapes: true,
            phones: true,
            manufacturers: None,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DemoError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
