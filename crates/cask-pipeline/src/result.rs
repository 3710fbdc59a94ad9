use std::io;

use thiserror::Error;

/// Cause of a failed record transfer, rendered for reporting.
///
/// Carried on the result channel rather than raised: a per-record failure
/// never crosses the pipeline boundary as a hard error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransferError(String);

impl TransferError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self(cause.into())
    }
}

impl From<io::Error> for TransferError {
    fn from(err: io::Error) -> Self {
        Self(err.to_string())
    }
}

impl From<&str> for TransferError {
    fn from(cause: &str) -> Self {
        Self(cause.to_string())
    }
}

impl From<String> for TransferError {
    fn from(cause: String) -> Self {
        Self(cause)
    }
}

/// Outcome of one record's transfer, exactly one per record sent.
#[derive(Clone, Debug)]
pub struct RecordResult {
    /// Pathname of the originating record.
    pub pathname: String,
    /// Success, or the transfer failure cause.
    pub outcome: Result<(), TransferError>,
}

impl RecordResult {
    pub fn ok(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            outcome: Ok(()),
        }
    }

    pub fn failed(pathname: impl Into<String>, cause: impl Into<TransferError>) -> Self {
        Self {
            pathname: pathname.into(),
            outcome: Err(cause.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_result() {
        let res = RecordResult::ok("/a");
        assert!(res.is_ok());
        assert_eq!(res.pathname, "/a");
    }

    #[test]
    fn failed_result_carries_cause() {
        let res = RecordResult::failed("/a", io::Error::new(io::ErrorKind::BrokenPipe, "mid-copy"));
        assert!(!res.is_ok());
        let cause = res.outcome.unwrap_err();
        assert!(cause.to_string().contains("mid-copy"));
    }
}
