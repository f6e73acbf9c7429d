//! Placement rules
//!
//! Constrain where a service's containers may run, either relative to another
//! label or in terms of machine attributes.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Service;

/// Machine attributes a placement rule may match on. Empty strings count as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineAttributes {
    pub provider: Option<String>,
    pub size: Option<String>,
    pub region: Option<String>,
    pub floating_ip: Option<String>,
}

impl MachineAttributes {
    fn normalized(self) -> Self {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }
        Self {
            provider: present(self.provider),
            size: present(self.size),
            region: present(self.region),
            floating_ip: present(self.floating_ip),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementRule {
    /// Place with (`exclusive = false`) or away from (`exclusive = true`) another label
    Label { exclusive: bool, other_label: String },
    /// Place on (or away from) machines matching the given attributes
    Machine {
        exclusive: bool,
        attributes: MachineAttributes,
    },
}

impl PlacementRule {
    pub fn label(exclusive: bool, other: &Service) -> Self {
        Self::label_named(exclusive, other.name())
    }

    /// Label rule against a label that may not exist yet
    pub fn label_named(exclusive: bool, other_label: impl Into<String>) -> Self {
        PlacementRule::Label {
            exclusive,
            other_label: other_label.into(),
        }
    }

    pub fn machine(exclusive: bool, attributes: MachineAttributes) -> Self {
        PlacementRule::Machine {
            exclusive,
            attributes: attributes.normalized(),
        }
    }

    pub fn exclusive(&self) -> bool {
        match self {
            PlacementRule::Label { exclusive, .. } | PlacementRule::Machine { exclusive, .. } => {
                *exclusive
            }
        }
    }

    pub fn other_label(&self) -> Option<&str> {
        match self {
            PlacementRule::Label { other_label, .. } => Some(other_label),
            PlacementRule::Machine { .. } => None,
        }
    }

    pub fn floating_ip(&self) -> Option<&str> {
        match self {
            PlacementRule::Machine { attributes, .. } => attributes.floating_ip.as_deref(),
            PlacementRule::Label { .. } => None,
        }
    }

    /// Machine attributes, empty for label rules
    pub fn attributes(&self) -> MachineAttributes {
        match self {
            PlacementRule::Machine { attributes, .. } => attributes.clone(),
            PlacementRule::Label { .. } => MachineAttributes::default(),
        }
    }
}
