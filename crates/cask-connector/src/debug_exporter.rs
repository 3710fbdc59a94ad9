use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::debug;

use cask_pipeline::{
    Exporter, PipelineResult, RecordReceiver, RecordResult, ResultSender,
};
use cask_types::LocationFlags;

/// Diagnostic sink a [`DebugExporter`] writes into.
pub type DebugSink = Box<dyn AsyncWrite + Send + Unpin>;

/// Exporter that dumps every record to a diagnostic stream.
///
/// Writes a `--- <pathname> ---` delimiter line followed by the fully copied
/// content. Any failure while handling one record becomes that record's
/// failure result; the stream always continues to the next record.
pub struct DebugExporter {
    sink: Mutex<DebugSink>,
}

impl DebugExporter {
    /// Exporter writing to standard error.
    pub fn stderr() -> Self {
        Self::with_sink(Box::new(tokio::io::stderr()))
    }

    /// Exporter writing to an arbitrary sink (used by tests).
    pub fn with_sink(sink: DebugSink) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    async fn dump(
        &self,
        record: &mut cask_pipeline::Record,
    ) -> Result<(), std::io::Error> {
        let mut sink = self.sink.lock().await;
        sink.write_all(format!("--- {} ---\n", record.pathname).as_bytes())
            .await?;
        if let Some(mut reader) = record.open().await? {
            tokio::io::copy(&mut reader, &mut *sink).await?;
            sink.write_all(b"\n").await?;
        }
        sink.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl Exporter for DebugExporter {
    fn root(&self) -> String {
        "stderr".to_string()
    }

    fn origin(&self) -> String {
        "localhost".to_string()
    }

    fn type_name(&self) -> &'static str {
        "debug"
    }

    fn flags(&self) -> LocationFlags {
        LocationFlags::LOCAL_FS
    }

    async fn ping(&self) -> PipelineResult<()> {
        Ok(())
    }

    async fn export(
        &self,
        mut records: RecordReceiver,
        results: ResultSender,
    ) -> PipelineResult<()> {
        while let Some(mut record) = records.recv().await {
            let result: RecordResult = match self.dump(&mut record).await {
                Ok(()) => record.ok(),
                Err(err) => record.failed(err),
            };
            debug!(pathname = %result.pathname, ok = result.is_ok(), "record handled");
            results.send(result).await?;
        }
        // Dropping `results` here closes the result channel: every received
        // record already has its outcome.
        Ok(())
    }

    async fn close(&self) -> PipelineResult<()> {
        Ok(())
    }
}
