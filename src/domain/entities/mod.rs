//! Domain Entities
//!
//! - `Machine`, `Container` - carry a reference-identity token
//! - `Service` - identified by its unique label
//! - `Connection`, `PlacementRule`, `Assertion` - plain values nested in the graph
//! - `Deployment` - aggregate root owning everything above

mod connection;
mod container;
mod deployment;
mod invariant;
mod machine;
mod placement;
mod service;

pub use connection::{Connection, Peer, PublicInternet};
pub use container::Container;
pub use deployment::{Deployable, Deployment, DeploymentOptions, DEFAULT_NAMESPACE};
pub use invariant::{Assertion, Invariant, InvariantForm};
pub use machine::{Machine, MachineOptions, Role};
pub use placement::{MachineAttributes, PlacementRule};
pub use service::Service;
