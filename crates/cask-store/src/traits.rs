use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::AsyncRead;

use cask_types::{ByteRange, LocationFlags, Mac, Resource, StoreMode};

use crate::error::StoreResult;

/// A readable blob stream handed back by [`Store::get`].
pub type BlobReader = Box<dyn AsyncRead + Send + Unpin>;

/// Content-addressed, category-partitioned blob store.
///
/// All implementations must satisfy these invariants:
/// - Every operation is safe to call concurrently from multiple tasks.
/// - A `put` publishes atomically after fully draining its input stream;
///   a concurrent `get` or `delete` on the same hash never observes a
///   partially written blob.
/// - Concurrent `put`s to the same hash have no ordering guarantee beyond
///   "last completed drain wins".
/// - Categories are independent: no operation on one category may block on
///   or observe another.
/// - Cancellation (dropping the operation's future) must take effect
///   promptly at every await point; unresponsiveness is a defect.
#[async_trait]
pub trait Store: Send + Sync {
    /// Origin identifier of the backing location (e.g. a hostname).
    fn origin(&self) -> String;

    /// Root location string of the backing storage.
    fn root(&self) -> String;

    /// Connector type tag.
    fn type_name(&self) -> &'static str;

    /// Descriptive location flags.
    fn flags(&self) -> LocationFlags;

    /// Liveness check.
    async fn ping(&self) -> StoreResult<()>;

    /// Capability flags: whether the store supports read, write, or both.
    async fn mode(&self) -> StoreResult<StoreMode>;

    /// Seed the store with its identity configuration and mark it usable.
    ///
    /// Calling `create` again replaces the configuration wholesale.
    async fn create(&self, config: &[u8]) -> StoreResult<()>;

    /// Return the configuration stored by `create`.
    ///
    /// Fails with [`StoreError::NotCreated`] if `create` was never called.
    ///
    /// [`StoreError::NotCreated`]: crate::StoreError::NotCreated
    async fn open(&self) -> StoreResult<Bytes>;

    /// Total bytes across every blob in all three categories.
    async fn size(&self) -> StoreResult<u64>;

    /// All hashes currently present in `resource`, order unspecified.
    async fn list(&self, resource: Resource) -> StoreResult<Vec<Mac>>;

    /// Drain `reader` fully, then publish the bytes under `mac` in
    /// `resource`, replacing any prior blob at that key. Returns the number
    /// of bytes stored.
    async fn put(
        &self,
        resource: Resource,
        mac: Mac,
        reader: &mut (dyn AsyncRead + Send + Unpin),
    ) -> StoreResult<u64>;

    /// Read the blob at `mac` in `resource`, optionally restricted to a
    /// clamped byte range.
    ///
    /// Absent packfiles fail with [`StoreError::PackfileNotFound`]; absent
    /// blobs in the other categories fail with [`StoreError::NotFound`].
    ///
    /// [`StoreError::PackfileNotFound`]: crate::StoreError::PackfileNotFound
    /// [`StoreError::NotFound`]: crate::StoreError::NotFound
    async fn get(
        &self,
        resource: Resource,
        mac: Mac,
        range: Option<ByteRange>,
    ) -> StoreResult<BlobReader>;

    /// Remove the blob at `mac` in `resource`. Removing an absent key
    /// succeeds.
    async fn delete(&self, resource: Resource, mac: Mac) -> StoreResult<()>;

    /// Release backend resources. The store must not be used afterwards.
    async fn close(&self) -> StoreResult<()>;
}
