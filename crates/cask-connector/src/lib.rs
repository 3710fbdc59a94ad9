//! Reference connector for the Cask pipeline and store.
//!
//! Demonstrates the minimum a connector must provide, and doubles as the
//! test double for the surrounding repository machinery:
//!
//! - [`FsImporter`] -- produces records from exactly one filesystem entry.
//!   Real importers replace the single entry with a traversal; the pipeline
//!   protocol stays the same.
//! - [`DebugExporter`] -- copies each record's content to a diagnostic
//!   stream. Observability only, not a durability guarantee.
//! - [`factory`] -- the registration boundary: construct a connector from a
//!   protocol string plus a string-keyed configuration map.

pub mod debug_exporter;
pub mod factory;
pub mod fs_importer;
#[cfg(test)]
mod testutil;

pub use debug_exporter::DebugExporter;
pub use factory::{new_exporter, new_importer, new_store, Config, ConnectorError};
pub use fs_importer::FsImporter;

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use cask_pipeline::{transfer, DEFAULT_CHANNEL_CAPACITY};

    use super::testutil::SharedBuf;
    use super::*;

    #[tokio::test]
    async fn end_to_end_single_entry_transfer() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"backup me").unwrap();
        file.flush().unwrap();

        let config: Config = [(
            "location".to_string(),
            file.path().display().to_string(),
        )]
        .into_iter()
        .collect();
        let importer = new_importer("fs", &config).unwrap();

        let buf = SharedBuf::new();
        let exporter = Arc::new(DebugExporter::with_sink(Box::new(buf.clone())));

        let (import_out, export_out) =
            transfer(importer, exporter, DEFAULT_CHANNEL_CAPACITY).await;
        import_out.unwrap();
        export_out.unwrap();

        let output = String::from_utf8(buf.contents()).unwrap();
        let expected = format!("--- {} ---\nbackup me\n", file.path().display());
        assert_eq!(output, expected);
    }

    #[tokio::test]
    async fn enumeration_failure_leaves_exporter_empty() {
        let config: Config = [("location".to_string(), "/no/such/entry".to_string())]
            .into_iter()
            .collect();
        let importer = new_importer("fs", &config).unwrap();

        let buf = SharedBuf::new();
        let exporter = Arc::new(DebugExporter::with_sink(Box::new(buf.clone())));

        let (import_out, export_out) = transfer(importer, exporter, 4).await;
        assert!(import_out.is_err());
        // The exporter saw a closed channel with zero records and exited
        // cleanly.
        export_out.unwrap();
        assert!(buf.contents().is_empty());
    }
}
