//! Building a deployment from a manifest

use std::collections::HashMap;

use crate::domain::entities::{
    Container, Deployment, DeploymentOptions, Invariant, Machine, MachineAttributes,
    MachineOptions, Peer, PlacementRule, PublicInternet, Service,
};
use crate::domain::session::BuildSession;
use crate::domain::value_objects::PUBLIC_INTERNET_LABEL;
use crate::error::{StitchError, StitchResult};

use super::types::{ContainerEntry, MachineEntry, Manifest, PlacementEntry, ServiceEntry};

impl Manifest {
    /// Build the described deployment on top of `base` options.
    ///
    /// Services keep their declared names unless the session renames a
    /// duplicate; references by name resolve to the first service declared
    /// with that name. References to undeclared services are kept as-is and
    /// left for validation to report. `deploy` entries also accept the
    /// assigned label of a renamed duplicate (`web2`).
    pub fn build(&self, session: &BuildSession, base: DeploymentOptions) -> StitchResult<Deployment> {
        let mut deployment = Deployment::new(self.deployment.apply_to(base));

        let containers = self.build_containers(session)?;
        let machine_groups: Vec<(Option<&str>, Vec<Machine>)> = self
            .machines
            .iter()
            .map(|entry| (entry.name.as_deref(), build_machines(session, entry)))
            .collect();

        let mut services = Vec::with_capacity(self.services.len());
        for entry in &self.services {
            services.push(build_service(session, entry, &containers)?);
        }

        let mut declared: HashMap<&str, usize> = HashMap::new();
        for (index, entry) in self.services.iter().enumerate() {
            declared.entry(entry.name.as_str()).or_insert(index);
        }
        let labels: Vec<String> = services.iter().map(|s| s.name().to_string()).collect();
        let resolve = |name: &str| -> Peer {
            if name == PUBLIC_INTERNET_LABEL {
                Peer::PublicInternet
            } else {
                match declared.get(name) {
                    Some(&index) => Peer::service(labels[index].clone()),
                    None => Peer::service(name),
                }
            }
        };

        for (service, entry) in services.iter_mut().zip(&self.services) {
            wire_service(service, entry, &resolve)?;
        }

        for entry in &self.invariants {
            let nodes = entry
                .nodes
                .iter()
                .map(|n| resolve(n).label().to_string())
                .collect();
            deployment.assert(Invariant::new(entry.form, nodes), entry.target);
        }

        match &self.deploy {
            None => {
                for (_, group) in machine_groups {
                    deployment.deploy(group)?;
                }
                deployment.deploy(services)?;
            }
            Some(names) => {
                for name in names {
                    let service = declared
                        .get(name.as_str())
                        .copied()
                        .or_else(|| labels.iter().position(|label| label == name));
                    if let Some(index) = service {
                        deployment.deploy(services[index].clone())?;
                    } else if let Some((_, group)) = machine_groups
                        .iter()
                        .find(|(group_name, _)| *group_name == Some(name.as_str()))
                    {
                        deployment.deploy(group.clone())?;
                    } else {
                        return Err(StitchError::InvalidDeployable { name: name.clone() });
                    }
                }
            }
        }

        tracing::debug!(
            machines = deployment.machines().len(),
            services = deployment.services().len(),
            invariants = deployment.invariants().len(),
            "built deployment from manifest"
        );
        Ok(deployment)
    }

    fn build_containers(&self, session: &BuildSession) -> StitchResult<HashMap<&str, Vec<Container>>> {
        let mut containers = HashMap::new();
        for entry in &self.containers {
            let group = build_container_group(session, entry);
            if containers.insert(entry.key.as_str(), group).is_some() {
                return Err(StitchError::DuplicateKey {
                    kind: "container",
                    key: entry.key.clone(),
                });
            }
        }
        Ok(containers)
    }
}

fn build_container_group(session: &BuildSession, entry: &ContainerEntry) -> Vec<Container> {
    let template = Container::new(session, &entry.image, &entry.command);
    for (key, value) in &entry.env {
        template.set_env(key.as_str(), value.as_str());
    }
    if entry.replicas == 1 {
        vec![template]
    } else {
        template.replicate(session, entry.replicas)
    }
}

fn build_machines(session: &BuildSession, entry: &MachineEntry) -> Vec<Machine> {
    let template = Machine::new(
        session,
        MachineOptions {
            provider: entry.provider.clone(),
            role: entry.role,
            region: entry.region.clone(),
            size: entry.size.clone(),
            floating_ip: entry.floating_ip.clone(),
            disk_size: entry.disk_size,
            ssh_keys: entry.ssh_keys.clone(),
            cpu: entry.cpu,
            ram: entry.ram,
        },
    );
    if entry.replicas == 1 {
        vec![template]
    } else {
        template.replicate(session, entry.replicas)
    }
}

fn build_service(
    session: &BuildSession,
    entry: &ServiceEntry,
    containers: &HashMap<&str, Vec<Container>>,
) -> StitchResult<Service> {
    let mut members = Vec::new();
    for key in &entry.containers {
        let group = containers
            .get(key.as_str())
            .ok_or_else(|| StitchError::UnresolvedReference {
                owner: format!("service '{}'", entry.name),
                kind: "container",
                reference: key.clone(),
            })?;
        // Clones are aliases: services listing one key share containers.
        members.extend(group.iter().cloned());
    }

    let mut service = Service::new(session, &entry.name, members);
    for annotation in &entry.annotations {
        service.annotate(annotation.as_str());
    }
    Ok(service)
}

fn wire_service<F>(service: &mut Service, entry: &ServiceEntry, resolve: &F) -> StitchResult<()>
where
    F: Fn(&str) -> Peer,
{
    for conn in &entry.connections {
        service.connect(conn.ports, resolve(&conn.to))?;
    }
    for ports in &entry.public_ingress {
        PublicInternet.connect(*ports, service)?;
    }
    for ports in &entry.public_egress {
        service.connect_to_public(*ports)?;
    }
    for placement in &entry.placements {
        service.place(placement_rule(placement, resolve));
    }
    Ok(())
}

fn placement_rule<F>(entry: &PlacementEntry, resolve: &F) -> PlacementRule
where
    F: Fn(&str) -> Peer,
{
    match &entry.label {
        Some(label) => PlacementRule::label_named(entry.exclusive, resolve(label).label()),
        None => PlacementRule::machine(
            entry.exclusive,
            MachineAttributes {
                provider: entry.provider.clone(),
                size: entry.size.clone(),
                region: entry.region.clone(),
                floating_ip: entry.floating_ip.clone(),
            },
        ),
    }
}
