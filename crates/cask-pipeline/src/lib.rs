//! Record streaming between a producer and a consumer.
//!
//! The pipeline moves file-like entries ([`Record`]) from an [`Importer`] to
//! an [`Exporter`] over two bounded channels: records flow one way, per-record
//! outcomes ([`RecordResult`]) flow back. Neither side ever buffers the full
//! set, and a record's content is opened lazily -- only when and if the
//! consumer decides to read it.
//!
//! # Protocol
//!
//! - The importer owns the record channel and closes it (by dropping the
//!   sender) once all records are sent or a fatal error occurs.
//! - The exporter owns the result channel and closes it after the record
//!   channel is exhausted and every received record has its result.
//! - Exactly one result per record, correlated by the record's pathname;
//!   result order need not match send order.
//! - A per-record transfer failure becomes a failure result and the stream
//!   continues. Only a failure to enumerate the source at all aborts the
//!   stream.

pub mod error;
pub mod record;
pub mod result;
pub mod traits;
pub mod transfer;

pub use error::{PipelineError, PipelineResult};
pub use record::{ContentOpener, ContentReader, OpenFuture, Record};
pub use result::{RecordResult, TransferError};
pub use traits::{
    Exporter, Importer, RecordReceiver, RecordSender, ResultReceiver, ResultSender,
};
pub use transfer::{transfer, DEFAULT_CHANNEL_CAPACITY};
