//! Exchange representation
//!
//! The flat, order-independent document handed to the orchestrator. Field
//! names and nesting are the compatibility surface with existing consumers
//! and must not change.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Assertion, Role};
use crate::domain::value_objects::{ObjectId, Range};
use crate::error::StitchResult;

/// The exported deployment
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stitch {
    pub machines: Vec<Machine>,
    pub labels: Vec<Label>,
    pub containers: Vec<Container>,
    pub connections: Vec<Connection>,
    pub placements: Vec<Placement>,
    pub invariants: Vec<Assertion>,
    pub namespace: String,
    #[serde(rename = "adminACL")]
    pub admin_acl: Vec<String>,
    pub regions: BTreeMap<String, Vec<String>>,
    pub max_price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Machine {
    pub id: ObjectId,
    pub provider: String,
    pub role: Role,
    pub region: String,
    pub size: String,
    pub floating_ip: String,
    pub disk_size: u32,
    pub ssh_keys: Vec<String>,
    pub cpu: Range,
    pub ram: Range,
}

/// A service as seen by the orchestrator: its label and the IDs of its containers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    pub name: String,
    pub ids: Vec<ObjectId>,
    pub annotations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Container {
    pub id: ObjectId,
    pub image: String,
    pub command: Vec<String>,
    pub env: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Connection {
    pub from: String,
    pub to: String,
    pub min_port: u32,
    pub max_port: u32,
}

/// Placement with absent optional attributes rendered as empty strings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Placement {
    pub target_label: String,
    pub exclusive: bool,
    pub other_label: String,
    pub provider: String,
    pub size: String,
    pub region: String,
    pub floating_ip: String,
}

impl Stitch {
    /// Parse a previously exported document
    pub fn from_json(json: &str) -> StitchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> StitchResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> StitchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn label(&self, name: &str) -> Option<&Label> {
        self.labels.iter().find(|l| l.name == name)
    }

    pub fn container(&self, id: &ObjectId) -> Option<&Container> {
        self.containers.iter().find(|c| &c.id == id)
    }
}

impl fmt::Display for Stitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
