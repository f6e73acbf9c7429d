//! Invariants and assertions
//!
//! Declared properties over labels that the orchestrator verifies. They are
//! carried through export untouched.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Peer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvariantForm {
    #[serde(rename = "reach")]
    Reach,
    #[serde(rename = "reachACL")]
    ReachAcl,
    #[serde(rename = "reachDirect")]
    ReachDirect,
    #[serde(rename = "between")]
    Between,
}

impl InvariantForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvariantForm::Reach => "reach",
            InvariantForm::ReachAcl => "reachACL",
            InvariantForm::ReachDirect => "reachDirect",
            InvariantForm::Between => "between",
        }
    }
}

/// An invariant expression, before a desired outcome is attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invariant {
    pub form: InvariantForm,
    pub nodes: Vec<String>,
}

impl Invariant {
    pub fn new(form: InvariantForm, nodes: Vec<String>) -> Self {
        Self { form, nodes }
    }

    /// `from` can reach `to`
    pub fn reach(from: impl Into<Peer>, to: impl Into<Peer>) -> Self {
        Self::from_peers(InvariantForm::Reach, [from.into(), to.into()])
    }

    /// `from` can reach `to` once ACLs are applied
    pub fn reach_acl(from: impl Into<Peer>, to: impl Into<Peer>) -> Self {
        Self::from_peers(InvariantForm::ReachAcl, [from.into(), to.into()])
    }

    /// `a` and `b` are directly adjacent
    pub fn neighbor(a: impl Into<Peer>, b: impl Into<Peer>) -> Self {
        Self::from_peers(InvariantForm::ReachDirect, [a.into(), b.into()])
    }

    /// Every path from `src` to `dst` passes through `mid`
    pub fn between(src: impl Into<Peer>, mid: impl Into<Peer>, dst: impl Into<Peer>) -> Self {
        Self::from_peers(InvariantForm::Between, [src.into(), mid.into(), dst.into()])
    }

    fn from_peers<const N: usize>(form: InvariantForm, peers: [Peer; N]) -> Self {
        Self {
            form,
            nodes: peers.iter().map(|p| p.label().to_string()).collect(),
        }
    }
}

/// An invariant plus the outcome it should have
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    pub form: InvariantForm,
    pub nodes: Vec<String>,
    pub target: bool,
}

impl Assertion {
    pub fn new(invariant: Invariant, desired: bool) -> Self {
        Self {
            form: invariant.form,
            nodes: invariant.nodes,
            target: desired,
        }
    }
}
