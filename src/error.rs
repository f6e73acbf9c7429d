//! Error types for Stitch
//!
//! Uses `thiserror` for library errors. The CLI wraps these with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Stitch operations
pub type StitchResult<T> = Result<T, StitchError>;

/// Main error type for Stitch operations
#[derive(Error, Debug)]
pub enum StitchError {
    /// A service connects to a label that was never deployed
    #[error("{service} has a connection to undeployed service: {target}")]
    UndeployedConnectionTarget { service: String, target: String },

    /// A placement rule is expressed in terms of an undeployed label
    #[error("{service} has a placement in terms of an undeployed service: {label}")]
    UndeployedPlacementTarget { service: String, label: String },

    /// Floating IP + public ingress + several containers on one service
    #[error("{service} has a floating IP and multiple containers. This is not yet supported.")]
    UnsupportedFloatingIpMultiContainer { service: String },

    /// Port range used against the public internet
    #[error("public internet cannot connect on port ranges")]
    InvalidPublicRange { min: u32, max: u32 },

    /// Something that cannot be attached to a deployment
    #[error("only objects that implement \"deploy(deployment)\" can be deployed (got '{name}')")]
    InvalidDeployable { name: String },

    /// Malformed deployment manifest
    #[error("invalid manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// A manifest entry refers to something that was never declared
    #[error("{owner} refers to unknown {kind} '{reference}'")]
    UnresolvedReference {
        owner: String,
        kind: &'static str,
        reference: String,
    },

    /// Two manifest entries share a key
    #[error("duplicate {kind} key '{key}'")]
    DuplicateKey { kind: &'static str, key: String },

    /// Malformed stitch.toml
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StitchError {
    /// True for the errors produced by deployment validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StitchError::UndeployedConnectionTarget { .. }
                | StitchError::UndeployedPlacementTarget { .. }
                | StitchError::UnsupportedFloatingIpMultiContainer { .. }
        )
    }

    /// Name of the service the error is about, if any.
    pub fn service(&self) -> Option<&str> {
        match self {
            StitchError::UndeployedConnectionTarget { service, .. }
            | StitchError::UndeployedPlacementTarget { service, .. }
            | StitchError::UnsupportedFloatingIpMultiContainer { service } => Some(service),
            _ => None,
        }
    }
}
