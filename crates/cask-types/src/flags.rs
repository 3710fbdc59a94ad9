use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Capability flags reported by a store's `mode()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreMode(u8);

impl StoreMode {
    pub const NONE: StoreMode = StoreMode(0);
    pub const READ: StoreMode = StoreMode(1 << 0);
    pub const WRITE: StoreMode = StoreMode(1 << 1);

    /// Returns `true` if every flag in `other` is set in `self`.
    pub fn contains(&self, other: StoreMode) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for StoreMode {
    type Output = StoreMode;

    fn bitor(self, rhs: StoreMode) -> StoreMode {
        StoreMode(self.0 | rhs.0)
    }
}

impl fmt::Display for StoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.contains(Self::READ), self.contains(Self::WRITE)) {
            (true, true) => f.write_str("read+write"),
            (true, false) => f.write_str("read"),
            (false, true) => f.write_str("write"),
            (false, false) => f.write_str("none"),
        }
    }
}

/// Descriptive location flags reported by connectors and stores.
///
/// These identify where a connector's data lives; they carry no behavioral
/// contract beyond identification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFlags(u8);

impl LocationFlags {
    pub const NONE: LocationFlags = LocationFlags(0);
    /// Backed by the local filesystem.
    pub const LOCAL_FS: LocationFlags = LocationFlags(1 << 0);

    pub fn contains(&self, other: LocationFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for LocationFlags {
    type Output = LocationFlags;

    fn bitor(self, rhs: LocationFlags) -> LocationFlags {
        LocationFlags(self.0 | rhs.0)
    }
}
