use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use cask_pipeline::{Exporter, Importer};
use cask_store::{MemoryStore, Store};

use crate::debug_exporter::DebugExporter;
use crate::fs_importer::FsImporter;

/// String-keyed connector configuration, as handed over by the registry.
pub type Config = HashMap<String, String>;

/// Errors from connector construction.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// No connector is registered under this protocol string.
    #[error("unknown protocol: {0}")]
    UnknownProtocol(String),

    /// A required configuration key is missing.
    #[error("missing required option: {0}")]
    MissingOption(&'static str),
}

/// Construct an importer for `proto`.
///
/// The `fs` importer requires a `location` option naming the entry to
/// enumerate.
pub fn new_importer(proto: &str, config: &Config) -> Result<Arc<dyn Importer>, ConnectorError> {
    match proto {
        "fs" => {
            let location = config
                .get("location")
                .ok_or(ConnectorError::MissingOption("location"))?;
            Ok(Arc::new(FsImporter::new(location)))
        }
        other => Err(ConnectorError::UnknownProtocol(other.to_string())),
    }
}

/// Construct an exporter for `proto`.
pub fn new_exporter(proto: &str, _config: &Config) -> Result<Arc<dyn Exporter>, ConnectorError> {
    match proto {
        "debug" => Ok(Arc::new(DebugExporter::stderr())),
        other => Err(ConnectorError::UnknownProtocol(other.to_string())),
    }
}

/// Construct a store for `proto`.
pub fn new_store(proto: &str, _config: &Config) -> Result<Arc<dyn Store>, ConnectorError> {
    match proto {
        "memory" => Ok(Arc::new(MemoryStore::new())),
        other => Err(ConnectorError::UnknownProtocol(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Config {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn unknown_protocols_are_rejected() {
        let empty = Config::new();
        assert!(matches!(
            new_importer("s3", &empty),
            Err(ConnectorError::UnknownProtocol(_))
        ));
        assert!(matches!(
            new_exporter("s3", &empty),
            Err(ConnectorError::UnknownProtocol(_))
        ));
        assert!(matches!(
            new_store("s3", &empty),
            Err(ConnectorError::UnknownProtocol(_))
        ));
    }

    #[test]
    fn fs_importer_requires_location() {
        let err = new_importer("fs", &Config::new()).err().unwrap();
        assert!(matches!(err, ConnectorError::MissingOption("location")));
    }

    #[test]
    fn fs_importer_reports_its_location() {
        let importer = new_importer("fs", &config(&[("location", "/tmp/docs/notes.md")])).unwrap();
        assert_eq!(importer.root(), "/tmp/docs");
        assert_eq!(importer.type_name(), "fs");
    }

    #[test]
    fn debug_exporter_constructs() {
        let exporter = new_exporter("debug", &Config::new()).unwrap();
        assert_eq!(exporter.type_name(), "debug");
    }

    #[tokio::test]
    async fn memory_store_is_usable_after_construction() {
        let store = new_store("memory", &Config::new()).unwrap();
        store.ping().await.unwrap();
        store.create(b"cfg").await.unwrap();
        assert_eq!(&store.open().await.unwrap()[..], b"cfg");
    }
}
