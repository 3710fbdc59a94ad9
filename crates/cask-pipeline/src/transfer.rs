use std::io;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::error::{PipelineError, PipelineResult};
use crate::traits::{Exporter, Importer};

/// Default bound for both pipeline channels. Small enough to exert
/// backpressure on fast producers, large enough to keep both sides busy.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Wire an importer to an exporter and run both sides to completion.
///
/// Builds the record and result channels with the given capacity, runs the
/// exporter on its own task, and returns each side's outcome. Channel
/// closure follows the protocol: the importer drops the record sender, the
/// exporter drops the result sender.
pub async fn transfer(
    importer: Arc<dyn Importer>,
    exporter: Arc<dyn Exporter>,
    capacity: usize,
) -> (PipelineResult<()>, PipelineResult<()>) {
    let capacity = capacity.max(1);
    let (record_tx, record_rx) = mpsc::channel(capacity);
    let (result_tx, result_rx) = mpsc::channel(capacity);

    debug!(
        from = %importer.root(),
        to = %exporter.root(),
        capacity,
        "transfer started"
    );

    let export_side = tokio::spawn(async move { exporter.export(record_rx, result_tx).await });
    let import_out = importer.import(record_tx, result_rx).await;
    let export_out = match export_side.await {
        Ok(out) => out,
        Err(join) => Err(PipelineError::Io(io::Error::new(io::ErrorKind::Other, join))),
    };

    debug!(
        import_ok = import_out.is_ok(),
        export_ok = export_out.is_ok(),
        "transfer finished"
    );
    (import_out, export_out)
}
