//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::DeploymentOptions;
use crate::error::StitchResult;

use super::loader::{self, ConfigWarning};

/// Deployment option defaults. Unset fields fall through to the next layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DeploymentDefaults {
    #[serde(default)]
    pub max_price: Option<f64>,

    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub admin_acl: Option<Vec<String>>,

    #[serde(default)]
    pub regions: Option<BTreeMap<String, Vec<String>>>,
}

impl DeploymentDefaults {
    /// Overlay the fields that are set onto `options`
    pub fn apply_to(&self, mut options: DeploymentOptions) -> DeploymentOptions {
        if let Some(max_price) = self.max_price {
            options.max_price = max_price;
        }
        if let Some(namespace) = &self.namespace {
            options.namespace = namespace.clone();
        }
        if let Some(admin_acl) = &self.admin_acl {
            options.admin_acl = admin_acl.clone();
        }
        if let Some(regions) = &self.regions {
            options.regions = regions.clone();
        }
        options
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Pretty-print JSON; unset means "pretty when writing to a terminal"
    #[serde(default)]
    pub pretty: Option<bool>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub deployment: DeploymentDefaults,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StitchResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StitchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (STITCH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Deployment options with these defaults applied
    pub fn deployment_options(&self) -> DeploymentOptions {
        self.deployment.apply_to(DeploymentOptions::default())
    }
}
