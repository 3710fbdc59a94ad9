use async_trait::async_trait;
use tokio::sync::mpsc;

use cask_types::LocationFlags;

use crate::error::PipelineResult;
use crate::record::Record;
use crate::result::RecordResult;

/// Producer end of the record channel. Dropping it signals end-of-stream.
pub type RecordSender = mpsc::Sender<Record>;
/// Consumer end of the record channel.
pub type RecordReceiver = mpsc::Receiver<Record>;
/// Consumer-owned sender for per-record outcomes.
pub type ResultSender = mpsc::Sender<RecordResult>;
/// Producer-owned receiver for per-record outcomes.
pub type ResultReceiver = mpsc::Receiver<RecordResult>;

/// Record producer: enumerates a source and streams records into the
/// pipeline.
#[async_trait]
pub trait Importer: Send + Sync {
    /// Root location string of the source.
    fn root(&self) -> String;

    /// Origin identifier (e.g. a hostname).
    fn origin(&self) -> String;

    /// Connector type tag.
    fn type_name(&self) -> &'static str;

    /// Descriptive location flags.
    fn flags(&self) -> LocationFlags;

    /// Liveness check against the source.
    async fn ping(&self) -> PipelineResult<()>;

    /// Enumerate the source and send every record on `records`, then drop
    /// the sender to signal end-of-stream. The sender must also be dropped
    /// on the failure path.
    ///
    /// An enumeration failure before any record is sent is returned as
    /// [`PipelineError::Enumeration`](crate::PipelineError::Enumeration) and
    /// aborts the whole stream. `results` delivers the consumer's per-record
    /// outcomes; implementations may drain it for reporting.
    async fn import(
        &self,
        records: RecordSender,
        results: ResultReceiver,
    ) -> PipelineResult<()>;

    /// Release source resources.
    async fn close(&self) -> PipelineResult<()>;
}

/// Record consumer: applies each record's side effects and reports one
/// outcome per record.
#[async_trait]
pub trait Exporter: Send + Sync {
    /// Root location string of the sink.
    fn root(&self) -> String;

    /// Origin identifier (e.g. a hostname).
    fn origin(&self) -> String;

    /// Connector type tag.
    fn type_name(&self) -> &'static str;

    /// Descriptive location flags.
    fn flags(&self) -> LocationFlags;

    /// Liveness check against the sink.
    async fn ping(&self) -> PipelineResult<()>;

    /// Receive records until the channel is exhausted, emitting exactly one
    /// result per record on `results`, then drop the sender.
    ///
    /// A failed individual transfer becomes a failure result and the stream
    /// continues; it must never abort the loop.
    async fn export(
        &self,
        records: RecordReceiver,
        results: ResultSender,
    ) -> PipelineResult<()>;

    /// Release sink resources.
    async fn close(&self) -> PipelineResult<()>;
}
