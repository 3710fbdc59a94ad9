use std::collections::HashMap;
use std::io::Cursor;
use std::sync::RwLock;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

use cask_types::{ByteRange, LocationFlags, Mac, Resource, StoreMode};

use crate::error::{StoreError, StoreResult};
use crate::traits::{BlobReader, Store};

/// Volatile, in-memory reference store.
///
/// One `RwLock`-guarded map per resource category, so categories never
/// contend with each other. Blobs are held as [`Bytes`], making range reads
/// and concurrent `get`s cheap slices of shared buffers. Locks are only held
/// for the map operation itself, never across an await point: `put` drains
/// its input stream completely before touching the map, which is what makes
/// publication atomic.
pub struct MemoryStore {
    config: RwLock<Option<Bytes>>,
    blobs: [RwLock<HashMap<Mac, Bytes>>; 3],
}

impl MemoryStore {
    /// Create a new store with no configuration and empty keyspaces.
    pub fn new() -> Self {
        Self {
            config: RwLock::new(None),
            blobs: Default::default(),
        }
    }

    fn map_for(&self, resource: Resource) -> &RwLock<HashMap<Mac, Bytes>> {
        &self.blobs[resource.index()]
    }

    /// Number of blobs in one category.
    pub fn len(&self, resource: Resource) -> usize {
        self.map_for(resource).read().expect("lock poisoned").len()
    }

    /// Returns `true` if all three categories are empty.
    pub fn is_empty(&self) -> bool {
        Resource::ALL.iter().all(|res| self.len(*res) == 0)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn origin(&self) -> String {
        "localhost".to_string()
    }

    fn root(&self) -> String {
        "memory".to_string()
    }

    fn type_name(&self) -> &'static str {
        "memory"
    }

    fn flags(&self) -> LocationFlags {
        LocationFlags::LOCAL_FS
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn mode(&self) -> StoreResult<StoreMode> {
        Ok(StoreMode::READ | StoreMode::WRITE)
    }

    async fn create(&self, config: &[u8]) -> StoreResult<()> {
        let mut guard = self.config.write().expect("lock poisoned");
        *guard = Some(Bytes::copy_from_slice(config));
        debug!(config_len = config.len(), "store created");
        Ok(())
    }

    async fn open(&self) -> StoreResult<Bytes> {
        let guard = self.config.read().expect("lock poisoned");
        guard.clone().ok_or(StoreError::NotCreated)
    }

    async fn size(&self) -> StoreResult<u64> {
        let mut total = 0u64;
        for res in Resource::ALL {
            let map = self.map_for(res).read().expect("lock poisoned");
            total += map.values().map(|blob| blob.len() as u64).sum::<u64>();
        }
        Ok(total)
    }

    async fn list(&self, resource: Resource) -> StoreResult<Vec<Mac>> {
        let map = self.map_for(resource).read().expect("lock poisoned");
        Ok(map.keys().copied().collect())
    }

    async fn put(
        &self,
        resource: Resource,
        mac: Mac,
        reader: &mut (dyn AsyncRead + Send + Unpin),
    ) -> StoreResult<u64> {
        // Drain fully before taking the lock; publication is a single
        // insert, so readers never see a partial blob.
        let mut data = Vec::new();
        reader.read_to_end(&mut data).await?;
        let len = data.len() as u64;

        let mut map = self.map_for(resource).write().expect("lock poisoned");
        map.insert(mac, Bytes::from(data));
        debug!(%resource, %mac, len, "blob stored");
        Ok(len)
    }

    async fn get(
        &self,
        resource: Resource,
        mac: Mac,
        range: Option<ByteRange>,
    ) -> StoreResult<BlobReader> {
        let data = {
            let map = self.map_for(resource).read().expect("lock poisoned");
            map.get(&mac)
                .cloned()
                .ok_or_else(|| StoreError::missing(resource, mac))?
        };
        let data = match range {
            Some(range) => data.slice(range.clamp(data.len())),
            None => data,
        };
        Ok(Box::new(Cursor::new(data)))
    }

    async fn delete(&self, resource: Resource, mac: Mac) -> StoreResult<()> {
        let mut map = self.map_for(resource).write().expect("lock poisoned");
        if map.remove(&mac).is_some() {
            debug!(%resource, %mac, "blob deleted");
        }
        Ok(())
    }

    async fn close(&self) -> StoreResult<()> {
        Ok(())
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("packfiles", &self.len(Resource::Packfile))
            .field("states", &self.len(Resource::State))
            .field("locks", &self.len(Resource::Lock))
            .finish()
    }
}
