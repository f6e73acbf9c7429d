//! Range value object
//!
//! A closed numeric interval used for port ranges and for machine resource
//! bounds (CPU cores, RAM). A bare number boxes into the degenerate `[n, n]`.

use serde::{Deserialize, Serialize};

/// Inclusive interval `[min, max]`.
///
/// `min <= max` is a construction convention and is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Range {
    pub min: u32,
    pub max: u32,
}

/// Port ranges are plain ranges.
pub type PortRange = Range;

impl Range {
    /// Create a range from its bounds
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// A single port, `[p, p]`
    pub fn port(p: u32) -> Self {
        Self { min: p, max: p }
    }

    /// True when the range covers exactly one value
    pub fn is_single(&self) -> bool {
        self.min == self.max
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

impl From<u32> for Range {
    fn from(n: u32) -> Self {
        Range::port(n)
    }
}

impl From<(u32, u32)> for Range {
    fn from((min, max): (u32, u32)) -> Self {
        Range::new(min, max)
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// Accepts either a bare number or a `{ min, max }` table.
#[derive(Deserialize)]
#[serde(untagged)]
enum RangeDe {
    Single(u32),
    Bounds {
        #[serde(default)]
        min: u32,
        #[serde(default)]
        max: u32,
    },
}

impl<'de> Deserialize<'de> for Range {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match RangeDe::deserialize(deserializer)? {
            RangeDe::Single(n) => Ok(Range::port(n)),
            RangeDe::Bounds { min, max } => Ok(Range { min, max }),
        }
    }
}
