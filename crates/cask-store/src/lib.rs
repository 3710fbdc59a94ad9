//! Content-addressed resource storage for Cask backup repositories.
//!
//! A store holds three categories of opaque blobs -- packfiles, state
//! snapshots, and coordination locks -- each keyed by a fixed-size content
//! hash ([`Mac`](cask_types::Mac)). The three keyspaces are fully
//! independent: the same hash in two categories names two unrelated blobs.
//!
//! # Backends
//!
//! All backends implement the [`Store`] trait:
//!
//! - [`MemoryStore`] -- volatile reference backend; documents the contract an
//!   on-disk or networked implementation must also satisfy
//!
//! # Design Rules
//!
//! 1. Blobs are immutable once published; `put` on an existing hash replaces
//!    the blob wholesale (last completed write wins, no versioning).
//! 2. A `put` drains its input stream fully before publishing, so concurrent
//!    readers never observe a partial blob.
//! 3. The store never interprets blob contents -- it is a pure key-value
//!    store partitioned by resource category.
//! 4. Categories never require cross-category locking.
//! 5. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::{BlobReader, Store};
