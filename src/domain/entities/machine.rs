//! Machine entity
//!
//! A machine request for the cloud provisioner. Every construction, including
//! every duplicate, carries a fresh reference-identity token, so replicas with
//! identical attributes still export under distinct IDs.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::domain::services::Identified;
use crate::domain::session::BuildSession;
use crate::domain::value_objects::{Range, RefId};
use crate::error::StitchResult;

/// Role of a machine in the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "")]
    Unset,
    Worker,
    Master,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Unset => "",
            Role::Worker => "Worker",
            Role::Master => "Master",
        }
    }

    /// Parse case-insensitively; the empty string is `Unset`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "" => Some(Role::Unset),
            "worker" => Some(Role::Worker),
            "master" => Some(Role::Master),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visible machine attributes. Absent fields default to empty/zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineOptions {
    pub provider: String,
    pub role: Role,
    pub region: String,
    pub size: String,
    pub floating_ip: String,
    pub disk_size: u32,
    pub ssh_keys: Vec<String>,
    pub cpu: Range,
    pub ram: Range,
}

/// A machine in the deployment.
///
/// Like [`Container`](super::Container), a `Machine` is a handle: `Clone`
/// aliases the same machine, and [`Machine::update`] through one handle is
/// seen through every other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    ref_id: RefId,
    state: Rc<RefCell<MachineOptions>>,
}

impl Machine {
    /// Create a machine with a fresh identity
    pub fn new(session: &BuildSession, options: MachineOptions) -> Self {
        Self {
            ref_id: session.next_ref_id(),
            state: Rc::new(RefCell::new(options)),
        }
    }

    /// The reference-identity token. `Clone` keeps it; [`Machine::duplicate`] does not.
    pub fn ref_id(&self) -> RefId {
        self.ref_id
    }

    /// Copy of the visible attributes
    pub fn options(&self) -> MachineOptions {
        self.state.borrow().clone()
    }

    pub fn role(&self) -> Role {
        self.state.borrow().role
    }

    pub fn ssh_keys(&self) -> Vec<String> {
        self.state.borrow().ssh_keys.clone()
    }

    /// Edit the attributes of this machine and all its aliases.
    ///
    /// `edit` must not go back through a handle to the same machine.
    pub fn update<F>(&self, edit: F)
    where
        F: FnOnce(&mut MachineOptions),
    {
        edit(&mut self.state.borrow_mut());
    }

    /// Whether both handles refer to the same machine
    pub fn is_alias_of(&self, other: &Machine) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// A new, independently identified machine with the same attributes.
    ///
    /// Nothing is shared with `self`: editing the copy's `ssh_keys` leaves
    /// the source untouched.
    pub fn duplicate(&self, session: &BuildSession) -> Self {
        Machine::new(session, self.options())
    }

    /// Duplicate with a different role
    pub fn with_role(&self, session: &BuildSession, role: Role) -> Self {
        Machine::new(
            session,
            MachineOptions {
                role,
                ..self.options()
            },
        )
    }

    pub fn as_worker(&self, session: &BuildSession) -> Self {
        self.with_role(session, Role::Worker)
    }

    pub fn as_master(&self, session: &BuildSession) -> Self {
        self.with_role(session, Role::Master)
    }

    /// `n` independently identified duplicates
    pub fn replicate(&self, session: &BuildSession, n: usize) -> Vec<Self> {
        (0..n).map(|_| self.duplicate(session)).collect()
    }
}

impl Identified for Machine {
    fn ref_id(&self) -> RefId {
        self.ref_id
    }

    fn structural_key(&self) -> StitchResult<String> {
        Ok(serde_json::to_string(&*self.state.borrow())?)
    }
}
