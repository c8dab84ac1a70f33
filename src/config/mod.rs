// ABOUTME: Configuration types and parsing for slipway.yml.
// ABOUTME: Handles YAML parsing, env var indirection for secrets, and discovery.

mod endpoint;
mod env_value;
mod init;
mod polling;

pub use endpoint::{EndpointConfig, Protocol};
pub use env_value::EnvValue;
pub use init::init_config;
pub use polling::PollingConfig;

use crate::error::{Error, Result};
use crate::types::{AppName, ProjectPath};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "slipway.yml";
pub const CONFIG_FILENAME_ALT: &str = "slipway.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".slipway/config.yml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub project: ProjectConfig,

    pub forge: EndpointConfig,

    pub scheduler: EndpointConfig,

    #[serde(default)]
    pub polling: PollingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// App identity on the scheduler; also the name shown to the operator.
    #[serde(deserialize_with = "deserialize_app_name")]
    pub name: AppName,

    /// Project path on the forge, e.g. `/group/my-app`.
    #[serde(deserialize_with = "deserialize_project_path")]
    pub path: ProjectPath,
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }
}

// Custom deserializers

fn deserialize_app_name<'de, D>(deserializer: D) -> std::result::Result<AppName, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    AppName::new(&s).map_err(serde::de::Error::custom)
}

fn deserialize_project_path<'de, D>(deserializer: D) -> std::result::Result<ProjectPath, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    ProjectPath::parse(&s).map_err(serde::de::Error::custom)
}
