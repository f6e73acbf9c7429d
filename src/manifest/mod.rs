//! Deployment manifests
//!
//! A manifest describes a deployment as data (TOML, YAML or JSON) and is
//! built into a [`Deployment`] through the same construction API a program
//! would use. This is what the `stitch` binary reads.

mod build;
mod types;

use std::fs;
use std::path::Path;

use crate::error::{StitchError, StitchResult};

pub use types::{
    ConnectionEntry, ContainerEntry, DeploymentSection, InvariantEntry, Manifest, MachineEntry,
    PlacementEntry, ServiceEntry,
};

/// Upper bound on `replicas` for a single machine or container entry
pub const MAX_REPLICAS: usize = 10_000;

/// Manifest serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Yaml,
    Json,
}

impl ManifestFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "toml" => Some(ManifestFormat::Toml),
            "yaml" | "yml" => Some(ManifestFormat::Yaml),
            "json" => Some(ManifestFormat::Json),
            _ => None,
        }
    }
}

impl Manifest {
    /// Read and parse a manifest file, choosing the format by extension
    pub fn from_path(path: &Path) -> StitchResult<Self> {
        let format = ManifestFormat::from_path(path).ok_or_else(|| StitchError::InvalidManifest {
            file: path.to_path_buf(),
            message: "unsupported extension (expected .toml, .yaml, .yml or .json)".to_string(),
        })?;
        let content = fs::read_to_string(path)?;
        Self::parse(&content, format, path)
    }

    /// Parse manifest content; `origin` is only used for error messages
    pub fn parse(content: &str, format: ManifestFormat, origin: &Path) -> StitchResult<Self> {
        let parsed: Result<Manifest, String> = match format {
            ManifestFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ManifestFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
            ManifestFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        parsed
            .and_then(|manifest| manifest.check_replicas().map(|()| manifest))
            .map_err(|message| StitchError::InvalidManifest {
                file: origin.to_path_buf(),
                message,
            })
    }

    fn check_replicas(&self) -> Result<(), String> {
        let machines = self
            .machines
            .iter()
            .map(|m| (m.name.as_deref().unwrap_or("(unnamed)"), m.replicas));
        let containers = self.containers.iter().map(|c| (c.key.as_str(), c.replicas));
        for (name, replicas) in machines.chain(containers) {
            if replicas > MAX_REPLICAS {
                return Err(format!(
                    "'{}' asks for {} replicas (at most {} allowed)",
                    name, replicas, MAX_REPLICAS
                ));
            }
        }
        Ok(())
    }
}
