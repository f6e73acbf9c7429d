//! Export pipeline
//!
//! validate → assign machine IDs → assign container IDs over every container
//! reference in every service → flatten services into labels, connections and
//! placements → emit each distinct container once.
//!
//! The deployment is only read, so exporting twice yields the same document.

use std::collections::BTreeMap;

use crate::domain::entities::{Container, Deployment, Machine, PlacementRule, Service};
use crate::domain::services::identity::assign_ids;
use crate::domain::services::validator;
use crate::domain::value_objects::{ObjectId, PUBLIC_INTERNET_LABEL};
use crate::error::StitchResult;
use crate::exchange;

/// Validate `deployment` and flatten it into the exchange representation
pub fn export(deployment: &Deployment) -> StitchResult<exchange::Stitch> {
    validator::validate(deployment)?;

    let machine_ids = assign_ids(deployment.machines())?;
    let machines = deployment
        .machines()
        .iter()
        .zip(machine_ids)
        .map(|(machine, id)| export_machine(machine, id))
        .collect();

    let container_refs: Vec<&Container> = deployment
        .services()
        .iter()
        .flat_map(|s| s.containers())
        .collect();
    let mut container_ids = assign_ids(&container_refs)?.into_iter();

    let mut containers = UniqueContainers::default();
    let mut labels = Vec::with_capacity(deployment.services().len());
    let mut connections = Vec::new();
    let mut placements = Vec::new();

    for service in deployment.services() {
        connections.extend(export_connections(service));
        placements.extend(export_placements(service));

        let mut ids = Vec::with_capacity(service.containers().len());
        for (container, id) in service.containers().iter().zip(container_ids.by_ref()) {
            containers.insert(export_container(container, id.clone()));
            ids.push(id);
        }

        labels.push(exchange::Label {
            name: service.name().to_string(),
            ids,
            annotations: service.annotations().to_vec(),
        });
    }

    let options = deployment.options();
    let stitch = exchange::Stitch {
        machines,
        labels,
        containers: containers.into_vec(),
        connections,
        placements,
        invariants: deployment.invariants().to_vec(),
        namespace: options.namespace.clone(),
        admin_acl: options.admin_acl.clone(),
        regions: options.regions.clone(),
        max_price: options.max_price,
    };

    tracing::debug!(
        machines = stitch.machines.len(),
        labels = stitch.labels.len(),
        containers = stitch.containers.len(),
        connections = stitch.connections.len(),
        placements = stitch.placements.len(),
        "exported deployment"
    );
    Ok(stitch)
}

/// Containers keyed by exported ID, kept in first-seen order.
#[derive(Default)]
struct UniqueContainers {
    slots: BTreeMap<ObjectId, usize>,
    ordered: Vec<exchange::Container>,
}

impl UniqueContainers {
    /// Last write wins for an ID already present
    fn insert(&mut self, container: exchange::Container) {
        match self.slots.get(&container.id) {
            Some(&slot) => self.ordered[slot] = container,
            None => {
                self.slots.insert(container.id.clone(), self.ordered.len());
                self.ordered.push(container);
            }
        }
    }

    fn into_vec(self) -> Vec<exchange::Container> {
        self.ordered
    }
}

fn export_machine(machine: &Machine, id: ObjectId) -> exchange::Machine {
    let options = machine.options();
    exchange::Machine {
        id,
        provider: options.provider,
        role: options.role,
        region: options.region,
        size: options.size,
        floating_ip: options.floating_ip,
        disk_size: options.disk_size,
        ssh_keys: options.ssh_keys,
        cpu: options.cpu,
        ram: options.ram,
    }
}

fn export_container(container: &Container, id: ObjectId) -> exchange::Container {
    exchange::Container {
        id,
        image: container.image(),
        command: container.command(),
        env: container.env(),
    }
}

/// Internal connections, then outbound public, then inbound public
fn export_connections(service: &Service) -> Vec<exchange::Connection> {
    let name = service.name();

    let internal = service.connections().iter().map(|conn| exchange::Connection {
        from: name.to_string(),
        to: conn.to.clone(),
        min_port: conn.min_port,
        max_port: conn.max_port,
    });

    let outgoing = service.outgoing_public().iter().map(|range| exchange::Connection {
        from: name.to_string(),
        to: PUBLIC_INTERNET_LABEL.to_string(),
        min_port: range.min,
        max_port: range.max,
    });

    let incoming = service.incoming_public().iter().map(|range| exchange::Connection {
        from: PUBLIC_INTERNET_LABEL.to_string(),
        to: name.to_string(),
        min_port: range.min,
        max_port: range.max,
    });

    internal.chain(outgoing).chain(incoming).collect()
}

fn export_placements(service: &Service) -> Vec<exchange::Placement> {
    service
        .placements()
        .iter()
        .map(|rule| export_placement(service.name(), rule))
        .collect()
}

fn export_placement(target: &str, rule: &PlacementRule) -> exchange::Placement {
    let attributes = rule.attributes();
    exchange::Placement {
        target_label: target.to_string(),
        exclusive: rule.exclusive(),
        other_label: rule.other_label().unwrap_or_default().to_string(),
        provider: attributes.provider.unwrap_or_default(),
        size: attributes.size.unwrap_or_default(),
        region: attributes.region.unwrap_or_default(),
        floating_ip: attributes.floating_ip.unwrap_or_default(),
    }
}
