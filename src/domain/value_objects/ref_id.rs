//! Reference-identity token
//!
//! Minted by a [`BuildSession`](crate::domain::session::BuildSession) every
//! time a machine or container is constructed or duplicated. Two entities
//! that carry the same token are the same logical object, however many
//! places refer to it.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefId(u64);

impl RefId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
