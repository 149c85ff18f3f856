//! Domain error taxonomy.
//!
//! A fixed set of failure kinds the command layer can raise. Each variant
//! carries just enough context to render the original tool's message; the
//! command layer converts these into `anyhow::Error` at the `?`/`.into()`
//! boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while locating, classifying, and installing packages.
#[derive(Debug, Error)]
pub enum Error {
    /// The archive path named on the command line does not exist.
    #[error("file '{}' does not exist", .0.display())]
    ArchiveNotFound(PathBuf),

    /// The path exists but is not a usable archive file.
    #[error("file '{}' is not an rpm archive", .0.display())]
    NotAnArchive(PathBuf),

    /// The filename matches none of the recognized package kinds.
    #[error("'{0}' is not .src.rpm or -debuginfo-")]
    UnrecognizedPackage(String),

    /// A required external tool is not on `PATH`.
    #[error("{0} is not installed")]
    ToolMissing(&'static str),

    /// Extraction of an archive's payload failed.
    #[error("failed to extract '{}'", .0.display())]
    ExtractionFailed(PathBuf),

    /// A path expected to be a directory is absent or is a non-directory.
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
}
