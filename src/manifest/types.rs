//! Manifest document types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::DeploymentDefaults;
use crate::domain::entities::{DeploymentOptions, InvariantForm, Role};
use crate::domain::value_objects::Range;

/// A whole deployment described as data
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Deployment option overrides
    #[serde(default)]
    pub deployment: DeploymentSection,

    #[serde(default)]
    pub machines: Vec<MachineEntry>,

    #[serde(default)]
    pub containers: Vec<ContainerEntry>,

    #[serde(default)]
    pub services: Vec<ServiceEntry>,

    #[serde(default)]
    pub invariants: Vec<InvariantEntry>,

    /// Names of machine groups and services to deploy; everything when absent
    #[serde(default)]
    pub deploy: Option<Vec<String>>,
}

/// The manifest's `[deployment]` table. Unlike `stitch.toml`, unknown keys
/// are an error here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeploymentSection {
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub admin_acl: Option<Vec<String>>,
    #[serde(default)]
    pub regions: Option<BTreeMap<String, Vec<String>>>,
}

impl DeploymentSection {
    /// Overlay the fields that are set onto `options`
    pub fn apply_to(&self, options: DeploymentOptions) -> DeploymentOptions {
        DeploymentDefaults::from(self.clone()).apply_to(options)
    }
}

impl From<DeploymentSection> for DeploymentDefaults {
    fn from(section: DeploymentSection) -> Self {
        Self {
            max_price: section.max_price,
            namespace: section.namespace,
            admin_acl: section.admin_acl,
            regions: section.regions,
        }
    }
}

/// One machine, or `replicas` look-alike machines
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineEntry {
    /// Group name, used by `deploy`
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub floating_ip: String,
    #[serde(default)]
    pub disk_size: u32,
    #[serde(default)]
    pub ssh_keys: Vec<String>,
    #[serde(default)]
    pub cpu: Range,
    #[serde(default)]
    pub ram: Range,
    #[serde(default = "default_replicas")]
    pub replicas: usize,
}

/// A container (or replicas of one) that services refer to by `key`.
///
/// Services listing the same key share the same container instances.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerEntry {
    pub key: String,
    pub image: String,
    #[serde(default)]
    pub command: Vec<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    #[serde(default = "default_replicas")]
    pub replicas: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceEntry {
    pub name: String,
    /// Container keys
    #[serde(default)]
    pub containers: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub connections: Vec<ConnectionEntry>,
    /// Ports opened from the public internet to this service
    #[serde(default)]
    pub public_ingress: Vec<Range>,
    /// Ports opened from this service to the public internet
    #[serde(default)]
    pub public_egress: Vec<Range>,
    #[serde(default)]
    pub placements: Vec<PlacementEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionEntry {
    /// Service name, or `public`
    pub to: String,
    pub ports: Range,
}

/// A label rule when `label` is set, a machine rule otherwise
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacementEntry {
    #[serde(default)]
    pub exclusive: bool,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub floating_ip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvariantEntry {
    pub form: InvariantForm,
    /// Service names, or `public`
    pub nodes: Vec<String>,
    #[serde(default = "default_true")]
    pub target: bool,
}

fn default_replicas() -> usize {
    1
}

fn default_true() -> bool {
    true
}
