use thiserror::Error;

use cask_types::{Mac, Resource};

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `open` was called before `create` seeded the store.
    #[error("store not created")]
    NotCreated,

    /// The backend does not support this resource category.
    ///
    /// The reference backend supports all three categories and never returns
    /// this; it exists for backends with partial category support.
    #[error("unsupported resource category: {0}")]
    UnsupportedResource(Resource),

    /// An absent packfile. Distinct from the generic [`NotFound`] variant
    /// because upstream retry and backfill logic branches on it.
    ///
    /// [`NotFound`]: StoreError::NotFound
    #[error("packfile not found: {0}")]
    PackfileNotFound(Mac),

    /// An absent state or lock blob.
    #[error("not found: {0}")]
    NotFound(Mac),

    /// I/O error from the input stream during `put`, or from the backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// The not-found variant appropriate for a resource category.
    pub fn missing(resource: Resource, mac: Mac) -> Self {
        match resource {
            Resource::Packfile => StoreError::PackfileNotFound(mac),
            _ => StoreError::NotFound(mac),
        }
    }

    /// Returns `true` for either not-found variant.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::PackfileNotFound(_) | StoreError::NotFound(_)
        )
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
