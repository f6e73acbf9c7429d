//! Domain Services
//!
//! Pure logic over the deployment graph, with no I/O.
//!
//! - `identity` - deterministic object IDs for machines and containers
//! - `validator` - referential-integrity checks before export
//! - `exporter` - flattening into the exchange representation

pub mod exporter;
mod identity;
pub mod validator;

pub use exporter::export;
pub use identity::{assign_ids, Identified};
pub use validator::{validate, violations};
