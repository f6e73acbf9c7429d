//! Domain Layer
//!
//! The core of Stitch - the deployment graph and the logic that turns it into
//! the exchange representation. Nothing in here touches the file system.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Range, RefId, ObjectId, labels)
//! - `entities/` - Machines, containers, services and the Deployment aggregate
//! - `services/` - Identity assignment, validation, export
//! - `session` - Per-build token allocator and label counters

pub mod entities;
pub mod services;
pub mod session;
pub mod value_objects;
