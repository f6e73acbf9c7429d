//! Container entity
//!
//! A container image plus command line and environment. Like machines,
//! containers carry a reference-identity token: the same container placed in
//! two services is exported once, while two look-alike containers built
//! separately are exported twice.
//!
//! A `Container` is a handle. `Clone` yields another handle to the same
//! container, so `set_env` through one handle is seen through every other,
//! including handles already held by services. [`Container::duplicate`] is the
//! way to get an independent copy.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;

use crate::domain::services::Identified;
use crate::domain::session::BuildSession;
use crate::domain::value_objects::RefId;
use crate::error::StitchResult;

/// Visible container attributes; everything but the token.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
struct ContainerState {
    image: String,
    command: Vec<String>,
    /// Key order is irrelevant, so it is kept sorted.
    env: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    ref_id: RefId,
    state: Rc<RefCell<ContainerState>>,
}

impl Container {
    /// Create a container with a fresh identity and an empty environment
    pub fn new<I, S>(session: &BuildSession, image: impl Into<String>, command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_state(
            session,
            ContainerState {
                image: image.into(),
                command: command.into_iter().map(Into::into).collect(),
                env: BTreeMap::new(),
            },
        )
    }

    /// Container running the image's default command
    pub fn from_image(session: &BuildSession, image: impl Into<String>) -> Self {
        Self::new(session, image, Vec::<String>::new())
    }

    fn with_state(session: &BuildSession, state: ContainerState) -> Self {
        Self {
            ref_id: session.next_ref_id(),
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn ref_id(&self) -> RefId {
        self.ref_id
    }

    pub fn image(&self) -> String {
        self.state.borrow().image.clone()
    }

    pub fn command(&self) -> Vec<String> {
        self.state.borrow().command.clone()
    }

    pub fn env(&self) -> BTreeMap<String, String> {
        self.state.borrow().env.clone()
    }

    pub fn env_var(&self, key: &str) -> Option<String> {
        self.state.borrow().env.get(key).cloned()
    }

    /// Set one environment variable on this container and all its aliases
    pub fn set_env(&self, key: impl Into<String>, value: impl Into<String>) {
        self.state.borrow_mut().env.insert(key.into(), value.into());
    }

    /// Replace the command line on this container and all its aliases
    pub fn set_command<I, S>(&self, command: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.borrow_mut().command = command.into_iter().map(Into::into).collect();
    }

    /// Whether both handles refer to the same container
    pub fn is_alias_of(&self, other: &Container) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// A new, independently identified container with the same attributes
    pub fn duplicate(&self, session: &BuildSession) -> Self {
        let state = self.state.borrow().clone();
        Self::with_state(session, state)
    }

    /// Duplicate with the environment replaced
    pub fn with_env<I, K, V>(&self, session: &BuildSession, env: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut state = self.state.borrow().clone();
        state.env = env.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self::with_state(session, state)
    }

    /// `n` independently identified duplicates
    pub fn replicate(&self, session: &BuildSession, n: usize) -> Vec<Self> {
        (0..n).map(|_| self.duplicate(session)).collect()
    }
}

impl Identified for Container {
    fn ref_id(&self) -> RefId {
        self.ref_id
    }

    fn structural_key(&self) -> StitchResult<String> {
        Ok(serde_json::to_string(&*self.state.borrow())?)
    }
}
