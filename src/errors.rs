use std::io;

use thiserror::Error;

/// Failures a caller can recover from. Fatal conditions (a report file that
/// cannot be opened, a request that cannot be serialized or sent) panic
/// instead of producing one of these.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
    #[error("failed to persist response to {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: io::Error,
    },
}
