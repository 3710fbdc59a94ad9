use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Fixed-size content hash addressing a blob within one resource keyspace.
///
/// A `Mac` is 32 opaque bytes. The store only compares MACs and uses them as
/// map keys; deriving them from blob contents is the repository layer's job,
/// and the same `Mac` value in two categories names two unrelated blobs.
/// [`Mac::compute`] is a convenience for that layer and for tests.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Mac([u8; 32]);

impl Mac {
    /// Hash raw bytes into a `Mac` (BLAKE3).
    pub fn compute(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Wrap a hash that was computed elsewhere.
    pub const fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The all-zero MAC, used where no blob is referenced.
    pub const fn null() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the all-zero MAC.
    pub fn is_null(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Raw bytes of the hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Full 64-character hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// First 8 hex characters, for logs.
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse a full hex rendering back into a `Mac`.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| TypeError::InvalidLength {
            expected: 32,
            actual: v.len(),
        })?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for Mac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mac({})", self.short_hex())
    }
}

impl fmt::Display for Mac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; 32]> for Mac {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Mac> for [u8; 32] {
    fn from(mac: Mac) -> Self {
        mac.0
    }
}
