use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Faults that stop a run before it can report a summary.
///
/// A missing file or substring is never one of these; those are ordinary
/// failed entries in a [`crate::checks::CategoryResult`].
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{field} contains an empty entry")]
    EmptyLabel { field: &'static str },

    #[error("could not write report: {0}")]
    Output(#[from] io::Error),

    #[error("could not read the current directory: {0}; use --root-dir")]
    WorkingDir(#[source] io::Error),
}
