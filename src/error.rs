//! Fatal error taxonomy.
//!
//! Per-line problems (unrecognized filenames, malformed listing paths) are
//! recovered locally with a stderr diagnostic and never surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    /// An input file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The mirror index carries nothing for the host's resolved slice,
    /// which usually means mismatched inputs rather than an empty report.
    #[error("mirror index has no packages for OS version {version} arch {arch}")]
    MissingMirrorBucket { version: u32, arch: String },
}
