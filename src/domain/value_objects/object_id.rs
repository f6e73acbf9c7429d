//! Object ID value object
//!
//! The final, exported identifier of a machine or container: a hex-encoded
//! SHA-256 digest of the entity's structural key and slot index.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Wrap an already computed identifier
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Hash an arbitrary string into an identifier
    pub fn digest(input: &str) -> Self {
        let hash = Sha256::digest(input.as_bytes());
        Self(format!("{:x}", hash))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
