//! Configuration module for Stitch
//!
//! Deployment options are layered:
//! 1. CLI flags (highest priority)
//! 2. Manifest `[deployment]` section
//! 3. Environment variables (STITCH_*)
//! 4. Project config (./stitch.toml) or user config (~/.config/stitch/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_env_overrides, parse_with_warnings, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, DeploymentDefaults, OutputConfig};
