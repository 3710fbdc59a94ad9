use std::time::SystemTime;

/// File metadata carried by a pipeline record.
///
/// Captured by the producer at enumeration time; the consumer uses it to
/// reconstruct the entry without touching the content stream.
#[derive(Clone, Debug, PartialEq)]
pub struct FileInfo {
    /// Logical (base) name of the entry.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Unix permission and type bits.
    pub mode: u32,
    /// Last modification time.
    pub modified: SystemTime,
    /// Device identifier the entry lives on.
    pub device: u64,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size: u64, mode: u32, modified: SystemTime, device: u64) -> Self {
        Self {
            name: name.into(),
            size,
            mode,
            modified,
            device,
        }
    }
}
