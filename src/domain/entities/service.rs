//! Service entity
//!
//! A named group of containers with its connections, public exposure,
//! placement rules and annotations. The name is the service's identity and
//! is made unique through the build session.

use crate::domain::entities::connection::require_single_port;
use crate::domain::entities::{Connection, Container, Invariant, Peer, PlacementRule};
use crate::domain::session::BuildSession;
use crate::domain::value_objects::{child_hostname, hostname, Range};
use crate::error::StitchResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    name: String,
    containers: Vec<Container>,
    annotations: Vec<String>,
    placements: Vec<PlacementRule>,
    connections: Vec<Connection>,
    outgoing_public: Vec<Range>,
    incoming_public: Vec<Range>,
}

impl Service {
    /// Create a service. `name` is rewritten to `name2`, `name3`, ... when
    /// the session has already handed it out.
    pub fn new(session: &BuildSession, name: &str, containers: Vec<Container>) -> Self {
        Self {
            name: session.unique_label_name(name),
            containers,
            annotations: Vec::new(),
            placements: Vec::new(),
            connections: Vec::new(),
            outgoing_public: Vec::new(),
            incoming_public: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    pub fn placements(&self) -> &[PlacementRule] {
        &self.placements
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn outgoing_public(&self) -> &[Range] {
        &self.outgoing_public
    }

    pub fn incoming_public(&self) -> &[Range] {
        &self.incoming_public
    }

    /// Hostname for the whole service
    pub fn hostname(&self) -> String {
        hostname(&self.name)
    }

    /// One hostname per container, numbered from 1
    pub fn children(&self) -> Vec<String> {
        (1..=self.containers.len())
            .map(|i| child_hostname(i, &self.name))
            .collect()
    }

    pub fn annotate(&mut self, annotation: impl Into<String>) {
        self.annotations.push(annotation.into());
    }

    pub fn place(&mut self, rule: PlacementRule) {
        self.placements.push(rule);
    }

    /// Open `ports` from this service to `to`.
    ///
    /// Connecting to the public internet only accepts a single port.
    pub fn connect(&mut self, ports: impl Into<Range>, to: impl Into<Peer>) -> StitchResult<()> {
        let ports = ports.into();
        match to.into() {
            Peer::PublicInternet => self.connect_to_public(ports),
            Peer::Service(label) => {
                self.connections.push(Connection::new(ports, label));
                Ok(())
            }
        }
    }

    /// Allow outbound traffic to the public internet on one port
    pub fn connect_to_public(&mut self, ports: impl Into<Range>) -> StitchResult<()> {
        let ports = require_single_port(ports.into())?;
        self.outgoing_public.push(ports);
        Ok(())
    }

    /// Allow inbound traffic from the public internet on one port
    pub fn connect_from_public(&mut self, ports: impl Into<Range>) -> StitchResult<()> {
        let ports = require_single_port(ports.into())?;
        self.incoming_public.push(ports);
        Ok(())
    }

    pub fn can_reach(&self, target: impl Into<Peer>) -> Invariant {
        Invariant::reach(self, target)
    }

    pub fn can_reach_acl(&self, target: impl Into<Peer>) -> Invariant {
        Invariant::reach_acl(self, target)
    }

    /// Every path from `src` to `dst` passes through this service
    pub fn between(&self, src: impl Into<Peer>, dst: impl Into<Peer>) -> Invariant {
        Invariant::between(src, self, dst)
    }

    pub fn neighbor_of(&self, target: impl Into<Peer>) -> Invariant {
        Invariant::neighbor(self, target)
    }

    /// True when any placement rule pins a floating IP
    pub fn has_floating_ip(&self) -> bool {
        self.placements.iter().any(|p| p.floating_ip().is_some())
    }
}
