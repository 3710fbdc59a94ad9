use std::path::{Path, PathBuf};
use std::time::SystemTime;

use async_trait::async_trait;
use tracing::{debug, warn};

use cask_pipeline::{
    ContentReader, Importer, PipelineError, PipelineResult, Record, RecordSender, ResultReceiver,
};
use cask_types::{FileInfo, LocationFlags};

/// Device identifier reported for every record. The reference importer does
/// not span filesystems.
const DEVICE_ID: u64 = 1;

/// Single-entry filesystem importer.
///
/// Enumerates exactly one configured entry and emits one record whose content
/// is opened lazily by the consumer. A real importer generalizes this to a
/// traversal rooted at `root()` without touching the pipeline protocol.
pub struct FsImporter {
    path: PathBuf,
}

impl FsImporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The single entry this importer tracks.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn enumeration_error(&self, source: std::io::Error) -> PipelineError {
        PipelineError::Enumeration {
            path: self.path.display().to_string(),
            source,
        }
    }
}

#[cfg(unix)]
fn mode_bits(meta: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode()
}

#[cfg(not(unix))]
fn mode_bits(_meta: &std::fs::Metadata) -> u32 {
    0
}

#[async_trait]
impl Importer for FsImporter {
    fn root(&self) -> String {
        self.path
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "/".to_string())
    }

    fn origin(&self) -> String {
        "localhost".to_string()
    }

    fn type_name(&self) -> &'static str {
        "fs"
    }

    fn flags(&self) -> LocationFlags {
        LocationFlags::LOCAL_FS
    }

    async fn ping(&self) -> PipelineResult<()> {
        tokio::fs::metadata(&self.path)
            .await
            .map(|_| ())
            .map_err(PipelineError::Io)
    }

    async fn import(
        &self,
        records: RecordSender,
        mut results: ResultReceiver,
    ) -> PipelineResult<()> {
        // Stat failure is fatal: no record was sent, the stream aborts. The
        // record channel still closes because `records` drops on return.
        let meta = match tokio::fs::metadata(&self.path).await {
            Ok(meta) => meta,
            Err(err) => return Err(self.enumeration_error(err)),
        };

        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        let info = FileInfo::new(
            name,
            meta.len(),
            mode_bits(&meta),
            meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            DEVICE_ID,
        );

        let path = self.path.clone();
        let record = Record::new(
            self.path.display().to_string(),
            "",
            info,
            Box::new(move || {
                Box::pin(async move {
                    let file = tokio::fs::File::open(&path).await?;
                    Ok(Box::new(file) as ContentReader)
                })
            }),
        );

        records.send(record).await?;
        drop(records);

        // Single record, so draining after the send cannot deadlock the
        // bounded result channel.
        while let Some(result) = results.recv().await {
            match &result.outcome {
                Ok(()) => debug!(pathname = %result.pathname, "record exported"),
                Err(cause) => warn!(pathname = %result.pathname, %cause, "record failed"),
            }
        }
        Ok(())
    }

    async fn close(&self) -> PipelineResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tokio::io::AsyncReadExt;
    use tokio::sync::mpsc;

    use super::*;

    fn temp_file(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn emits_one_record_with_metadata_and_lazy_content() {
        let file = temp_file(b"some notes");
        let importer = std::sync::Arc::new(FsImporter::new(file.path()));

        let (record_tx, mut record_rx) = mpsc::channel(4);
        let (result_tx, result_rx) = mpsc::channel(4);

        let side = {
            let importer = importer.clone();
            tokio::spawn(async move { importer.import(record_tx, result_rx).await })
        };

        let mut record = record_rx.recv().await.expect("one record");
        assert_eq!(record.pathname, file.path().display().to_string());
        assert_eq!(record.info.size, 10);
        assert_eq!(record.info.device, 1);
        assert!(record.target.is_empty());

        let mut reader = record.open().await.unwrap().expect("content");
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).await.unwrap();
        assert_eq!(buf, b"some notes");

        // Exactly one record.
        assert!(record_rx.recv().await.is_none());

        result_tx.send(record.ok()).await.unwrap();
        drop(result_tx);
        side.await.unwrap().unwrap();

        assert_eq!(importer.path(), file.path());
    }

    #[tokio::test]
    async fn missing_entry_aborts_before_any_record() {
        let importer = FsImporter::new("/no/such/entry");

        let (record_tx, mut record_rx) = mpsc::channel(4);
        let (_result_tx, result_rx) = mpsc::channel(4);

        let err = importer.import(record_tx, result_rx).await.unwrap_err();
        assert!(matches!(err, PipelineError::Enumeration { .. }));

        // Channel closed with nothing sent.
        assert!(record_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn ping_reflects_entry_presence() {
        let file = temp_file(b"x");
        assert!(FsImporter::new(file.path()).ping().await.is_ok());
        assert!(FsImporter::new("/no/such/entry").ping().await.is_err());
    }

    #[tokio::test]
    async fn metadata_accessors() {
        let importer = FsImporter::new("/tmp/docs/notes.md");
        assert_eq!(importer.root(), "/tmp/docs");
        assert_eq!(importer.origin(), "localhost");
        assert_eq!(importer.type_name(), "fs");
        assert!(importer.flags().contains(LocationFlags::LOCAL_FS));
    }
}
