use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::package::{PackageKind, StoreLayout};

/// Everything the installer derives from an archive path.
///
/// Never persisted: recomputed on each invocation. The package counts as
/// installed iff `store_path` exists as a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRecord {
    pub kind: PackageKind,
    /// e.g. `httpd-debuginfo-1.0`
    pub base_name: String,
    /// Absolute path of the archive being installed.
    pub archive_path: PathBuf,
    /// e.g. `$HOME/.debuginfo`
    pub store_root: PathBuf,
    /// e.g. `$HOME/.debuginfo/httpd-debuginfo-1.0`
    pub store_path: PathBuf,
}

impl InstallRecord {
    /// Derive the install facts for `archive_path`, which the caller has
    /// already made absolute. Classification looks at the final path
    /// component only; non-UTF-8 filenames are unrecognized.
    pub fn resolve(archive_path: &Path, layout: &StoreLayout) -> Result<Self, Error> {
        let file_name = archive_path
            .file_name()
            .and_then(OsStr::to_str)
            .ok_or_else(|| Error::UnrecognizedPackage(archive_path.display().to_string()))?;
        let kind = PackageKind::classify(file_name)?;
        let base_name = kind.base_name(file_name);
        let store_root = layout.root_for(kind).to_path_buf();
        let store_path = store_root.join(&base_name);
        Ok(Self {
            kind,
            base_name,
            archive_path: archive_path.to_path_buf(),
            store_root,
            store_path,
        })
    }
}
