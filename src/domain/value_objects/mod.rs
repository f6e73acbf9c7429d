//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod label;
mod object_id;
mod range;
mod ref_id;

pub use label::{child_hostname, hostname, PUBLIC_INTERNET_LABEL};
pub use object_id::ObjectId;
pub use range::{PortRange, Range};
pub use ref_id::RefId;
