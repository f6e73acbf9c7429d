//! Connection and peer types
//!
//! A connection opens a port range from one service to another. The public
//! internet is a pseudo-peer under a reserved label that only accepts
//! single ports.

use crate::domain::entities::{Invariant, Service};
use crate::domain::value_objects::{Range, PUBLIC_INTERNET_LABEL};
use crate::error::{StitchError, StitchResult};

/// Outbound connection stored on the source service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub min_port: u32,
    pub max_port: u32,
    /// Label of the target service
    pub to: String,
}

impl Connection {
    pub fn new(ports: Range, to: impl Into<String>) -> Self {
        Self {
            min_port: ports.min,
            max_port: ports.max,
            to: to.into(),
        }
    }

    pub fn ports(&self) -> Range {
        Range::new(self.min_port, self.max_port)
    }
}

/// Something a service can connect to or reason about
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Peer {
    /// A service, addressed by its label
    Service(String),
    PublicInternet,
}

impl Peer {
    /// A service peer by label
    pub fn service(label: impl Into<String>) -> Self {
        Peer::Service(label.into())
    }

    pub fn label(&self) -> &str {
        match self {
            Peer::Service(label) => label,
            Peer::PublicInternet => PUBLIC_INTERNET_LABEL,
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Peer::PublicInternet)
    }
}

impl From<&Service> for Peer {
    fn from(service: &Service) -> Self {
        Peer::Service(service.name().to_string())
    }
}

impl From<PublicInternet> for Peer {
    fn from(_: PublicInternet) -> Self {
        Peer::PublicInternet
    }
}

/// The open internet, usable wherever a service peer is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PublicInternet;

impl PublicInternet {
    /// Allow inbound traffic from the internet to `to`
    pub fn connect(&self, ports: impl Into<Range>, to: &mut Service) -> StitchResult<()> {
        to.connect_from_public(ports)
    }

    pub fn can_reach(&self, to: impl Into<Peer>) -> Invariant {
        Invariant::reach(Peer::PublicInternet, to)
    }
}

/// Rejects anything other than a single port.
pub(crate) fn require_single_port(ports: Range) -> StitchResult<Range> {
    if ports.is_single() {
        Ok(ports)
    } else {
        Err(StitchError::InvalidPublicRange {
            min: ports.min,
            max: ports.max,
        })
    }
}
