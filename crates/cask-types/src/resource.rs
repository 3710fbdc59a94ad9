use std::fmt;

use serde::{Deserialize, Serialize};

/// The three independent keyspaces of a backup store.
///
/// A [`Mac`](crate::Mac) only identifies a blob *within* one resource
/// category; the same hash value in two categories refers to two unrelated
/// blobs and never collides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    /// Data segments holding packed object contents.
    Packfile,
    /// Repository state snapshots.
    State,
    /// Coordination locks.
    Lock,
}

impl Resource {
    /// All categories, in stable order.
    pub const ALL: [Resource; 3] = [Resource::Packfile, Resource::State, Resource::Lock];

    /// Stable index for array-backed per-category partitioning.
    pub fn index(&self) -> usize {
        match self {
            Resource::Packfile => 0,
            Resource::State => 1,
            Resource::Lock => 2,
        }
    }

    /// Lowercase name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Packfile => "packfile",
            Resource::State => "state",
            Resource::Lock => "lock",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
