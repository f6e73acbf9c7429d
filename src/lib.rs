//! Stitch - declarative deployment builder
//!
//! Describe machines, containers, services, their connections, placement
//! constraints and reachability invariants, then export the whole graph as
//! a flat, ID-keyed JSON document for a cluster controller.
//!
//! ```
//! use stitch::{BuildSession, Deployment, DeploymentOptions, PublicInternet};
//!
//! let session = BuildSession::new();
//! let nginx = session.container("nginx", Vec::<String>::new());
//! let mut web = session.service("web", nginx.replicate(&session, 2));
//! PublicInternet.connect(80, &mut web).unwrap();
//!
//! let mut deployment = Deployment::new(DeploymentOptions::default());
//! deployment.deploy(web).unwrap();
//!
//! let stitch = deployment.export().unwrap();
//! assert_eq!(stitch.containers.len(), 2);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod manifest;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{
    Assertion, Connection, Container, Deployable, Deployment, DeploymentOptions, Invariant,
    InvariantForm, Machine, MachineAttributes, MachineOptions, Peer, PlacementRule, PublicInternet,
    Role, Service,
};
pub use domain::services::{export, validate, violations};
pub use domain::session::BuildSession;
pub use domain::value_objects::{ObjectId, PortRange, Range, PUBLIC_INTERNET_LABEL};
pub use error::{StitchError, StitchResult};
pub use exchange::Stitch;
pub use manifest::{Manifest, ManifestFormat};
