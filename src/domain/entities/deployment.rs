//! Deployment aggregate
//!
//! Owns every top-level collection of a build. Entities join a deployment
//! through [`Deployable`]; invariants join through [`Deployment::assert`].
//! Exporting never mutates the deployment, so it may be exported repeatedly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Assertion, Invariant, Machine, Service};
use crate::domain::services::exporter;
use crate::error::StitchResult;
use crate::exchange::Stitch;

/// Namespace used when none is configured
pub const DEFAULT_NAMESPACE: &str = "default-namespace";

/// Deployment-wide policy fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentOptions {
    pub max_price: f64,
    pub namespace: String,
    pub admin_acl: Vec<String>,
    /// Provider → allowed regions
    pub regions: BTreeMap<String, Vec<String>>,
}

impl Default for DeploymentOptions {
    fn default() -> Self {
        Self {
            max_price: 0.0,
            namespace: DEFAULT_NAMESPACE.to_string(),
            admin_acl: Vec::new(),
            regions: BTreeMap::new(),
        }
    }
}

/// Anything that knows how to attach itself to a deployment.
///
/// Implement this for your own types to bundle several entities behind one
/// `deploy` call.
pub trait Deployable {
    fn deploy(self, deployment: &mut Deployment) -> StitchResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct Deployment {
    options: DeploymentOptions,
    machines: Vec<Machine>,
    services: Vec<Service>,
    invariants: Vec<Assertion>,
}

impl Deployment {
    pub fn new(options: DeploymentOptions) -> Self {
        Self {
            options,
            machines: Vec::new(),
            services: Vec::new(),
            invariants: Vec::new(),
        }
    }

    pub fn options(&self) -> &DeploymentOptions {
        &self.options
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn invariants(&self) -> &[Assertion] {
        &self.invariants
    }

    /// Look up a deployed service by label
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name() == name)
    }

    /// Attach one deployable (or a collection of them)
    pub fn deploy(&mut self, item: impl Deployable) -> StitchResult<()> {
        item.deploy(self)
    }

    /// Record that `invariant` should evaluate to `desired`
    pub fn assert(&mut self, invariant: Invariant, desired: bool) {
        self.invariants.push(Assertion::new(invariant, desired));
    }

    /// Validate and flatten into the exchange representation
    pub fn export(&self) -> StitchResult<Stitch> {
        exporter::export(self)
    }
}

impl Deployable for Machine {
    fn deploy(self, deployment: &mut Deployment) -> StitchResult<()> {
        deployment.machines.push(self);
        Ok(())
    }
}

impl Deployable for Service {
    fn deploy(self, deployment: &mut Deployment) -> StitchResult<()> {
        deployment.services.push(self);
        Ok(())
    }
}

impl<T: Deployable> Deployable for Vec<T> {
    fn deploy(self, deployment: &mut Deployment) -> StitchResult<()> {
        for item in self {
            item.deploy(deployment)?;
        }
        Ok(())
    }
}

impl<T: Deployable, const N: usize> Deployable for [T; N] {
    fn deploy(self, deployment: &mut Deployment) -> StitchResult<()> {
        for item in self {
            item.deploy(deployment)?;
        }
        Ok(())
    }
}
