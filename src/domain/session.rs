//! Build session
//!
//! Holds the two pieces of mutable state a build needs: the allocator for
//! reference-identity tokens and the per-name counters behind unique service
//! labels. Every constructor takes the session explicitly, so two builds in
//! the same process never observe each other and replaying a build against a
//! fresh session reproduces the same tokens and labels.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::domain::entities::{Container, Machine, MachineOptions, Service};
use crate::domain::value_objects::RefId;

/// State scoped to one build/evaluation.
///
/// Not `Sync`: a session belongs to a single logical build.
#[derive(Debug, Default)]
pub struct BuildSession {
    last_ref: Cell<u64>,
    label_counts: RefCell<HashMap<String, u32>>,
}

impl BuildSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh reference-identity token.
    pub fn next_ref_id(&self) -> RefId {
        let next = self.last_ref.get() + 1;
        self.last_ref.set(next);
        RefId::new(next)
    }

    /// Return `name` the first time it is requested, then `name2`, `name3`, ...
    ///
    /// Never fails: duplicates are silently renamed.
    pub fn unique_label_name(&self, name: &str) -> String {
        let mut counts = self.label_counts.borrow_mut();
        let count = counts.entry(name.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            name.to_string()
        } else {
            format!("{}{}", name, count)
        }
    }

    /// Shorthand for [`Machine::new`]
    pub fn machine(&self, options: MachineOptions) -> Machine {
        Machine::new(self, options)
    }

    /// Shorthand for [`Container::new`]
    pub fn container<I, S>(&self, image: impl Into<String>, command: I) -> Container
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Container::new(self, image, command)
    }

    /// Shorthand for [`Service::new`]
    pub fn service(&self, name: &str, containers: Vec<Container>) -> Service {
        Service::new(self, name, containers)
    }
}
