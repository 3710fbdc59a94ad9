use std::fmt;
use std::future::Future;
use std::io;
use std::pin::Pin;

use tokio::io::AsyncRead;

use cask_types::FileInfo;

use crate::result::{RecordResult, TransferError};

/// A readable content stream produced by a record's opener.
pub type ContentReader = Box<dyn AsyncRead + Send + Unpin>;

/// Future returned by a [`ContentOpener`].
pub type OpenFuture = Pin<Box<dyn Future<Output = io::Result<ContentReader>> + Send>>;

/// Deferred content acquisition: a one-shot async factory for the record's
/// byte stream. Invoked at most once, by the consumer, never by the producer.
pub type ContentOpener = Box<dyn FnOnce() -> OpenFuture + Send>;

/// A pending transfer unit.
///
/// The producer constructs and owns a record until it is sent on the record
/// channel; from then on the consumer owns it until it emits the correlated
/// [`RecordResult`]. Correlation is by `pathname`, not by channel position:
/// a producer must not have two records with the same pathname in flight at
/// once, or their results become indistinguishable.
pub struct Record {
    /// Logical path of the entry at the source.
    pub pathname: String,
    /// Alternate name (e.g. a link target); empty when unused.
    pub target: String,
    /// Metadata captured at enumeration time.
    pub info: FileInfo,
    opener: Option<ContentOpener>,
}

impl Record {
    /// A record with lazily openable content.
    pub fn new(
        pathname: impl Into<String>,
        target: impl Into<String>,
        info: FileInfo,
        opener: ContentOpener,
    ) -> Self {
        Self {
            pathname: pathname.into(),
            target: target.into(),
            info,
            opener: Some(opener),
        }
    }

    /// A record carrying metadata only (e.g. a directory entry).
    pub fn without_content(
        pathname: impl Into<String>,
        target: impl Into<String>,
        info: FileInfo,
    ) -> Self {
        Self {
            pathname: pathname.into(),
            target: target.into(),
            info,
            opener: None,
        }
    }

    /// Returns `true` if the record still holds an unopened content stream.
    pub fn has_content(&self) -> bool {
        self.opener.is_some()
    }

    /// Open the content stream.
    ///
    /// Returns `Ok(None)` for records without content or when the stream was
    /// already opened; the opener is consumed on first use.
    pub async fn open(&mut self) -> io::Result<Option<ContentReader>> {
        match self.opener.take() {
            Some(open) => open().await.map(Some),
            None => Ok(None),
        }
    }

    /// Build the success result correlated to this record.
    pub fn ok(&self) -> RecordResult {
        RecordResult::ok(&self.pathname)
    }

    /// Build the failure result correlated to this record.
    pub fn failed(&self, cause: impl Into<TransferError>) -> RecordResult {
        RecordResult::failed(&self.pathname, cause)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("pathname", &self.pathname)
            .field("target", &self.target)
            .field("size", &self.info.size)
            .field("has_content", &self.has_content())
            .finish()
    }
}
