use std::io;

use thiserror::Error;
use tokio::sync::mpsc::error::SendError;

/// Errors that abort a pipeline side outright.
///
/// Per-record failures are not represented here; those travel the result
/// channel as [`RecordResult`](crate::RecordResult) failures.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source could not be enumerated at all. Fatal: raised before any
    /// record is sent, with the record channel closed.
    #[error("enumeration failed for {path}: {source}")]
    Enumeration {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The peer dropped its end of a channel mid-stream.
    #[error("pipeline channel closed by peer")]
    ChannelClosed,

    /// I/O failure outside any single record's transfer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl<T> From<SendError<T>> for PipelineError {
    fn from(_: SendError<T>) -> Self {
        PipelineError::ChannelClosed
    }
}

/// Result alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
