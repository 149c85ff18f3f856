//! On-disk store layout and the mutations that populate it.
//!
//! The store is two root directories under the user's home, one
//! subdirectory per installed package. Directory existence is the only
//! durable state.

use anyhow::{Context, Result};
use log::debug;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::package::PackageKind;
use crate::runtime::Runtime;

/// The two fixed store roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    pub debuginfo_root: PathBuf,
    pub srpm_root: PathBuf,
}

impl StoreLayout {
    pub fn from_runtime<R: Runtime>(runtime: &R) -> Result<Self> {
        let home = runtime
            .home_dir()
            .context("Could not find home directory")?;
        Ok(Self::under_home(&home))
    }

    pub fn under_home(home: &Path) -> Self {
        Self {
            debuginfo_root: home.join(".debuginfo"),
            srpm_root: home.join(".srpm"),
        }
    }

    pub fn root_for(&self, kind: PackageKind) -> &Path {
        match kind {
            PackageKind::DebugInfo => &self.debuginfo_root,
            PackageKind::SourceRpm => &self.srpm_root,
        }
    }

    /// Roots in display and selection order: debuginfo first.
    pub fn roots(&self) -> [&Path; 2] {
        [&self.debuginfo_root, &self.srpm_root]
    }
}

/// Create `root` if it is absent. A non-directory squatting the path is a
/// fatal inconsistency.
pub fn ensure_root<R: Runtime>(runtime: &R, root: &Path) -> Result<()> {
    if runtime.exists(root) {
        if !runtime.is_dir(root) {
            return Err(Error::NotADirectory(root.to_path_buf()).into());
        }
        debug!("store root {:?} already exists", root);
        return Ok(());
    }
    debug!("creating store root {:?}", root);
    runtime.create_dir_all(root)
}

/// Move the extracted payload tree at `src` to `dest` inside the store.
///
/// Rename is atomic on the same filesystem. Across filesystems (the
/// scratch area usually lives on another mount than the home directory)
/// the tree is first copied into a dot-prefixed staging directory next to
/// `dest` and then renamed into place, so `dest` never appears
/// half-written under its final name.
pub fn adopt<R: Runtime>(runtime: &R, src: &Path, dest: &Path) -> Result<()> {
    if runtime.rename(src, dest).is_ok() {
        return Ok(());
    }

    debug!("rename of {:?} failed, copying into the store instead", src);
    let staging = staging_dir(dest)?;
    if let Err(e) = copy_tree(runtime, src, &staging) {
        let _ = runtime.remove_dir_all(&staging);
        return Err(e);
    }
    runtime.rename(&staging, dest)
}

fn staging_dir(dest: &Path) -> Result<PathBuf> {
    let parent = dest.parent().context("store path has no parent")?;
    let name = dest
        .file_name()
        .and_then(OsStr::to_str)
        .context("store path has no file name")?;
    Ok(parent.join(format!(".{name}.partial")))
}

/// Recursive copy preserving symlinks as symlinks.
fn copy_tree<R: Runtime>(runtime: &R, src: &Path, dest: &Path) -> Result<()> {
    runtime.create_dir_all(dest)?;
    for entry in runtime.read_dir(src)? {
        let name = entry
            .file_name()
            .with_context(|| format!("unreadable entry under {:?}", src))?;
        let target = dest.join(name);
        if runtime.is_symlink(&entry) {
            let link_target = runtime.read_link(&entry)?;
            runtime.symlink(&link_target, &target)?;
        } else if runtime.is_dir(&entry) {
            copy_tree(runtime, &entry, &target)?;
        } else {
            runtime.copy(&entry, &target)?;
        }
    }
    Ok(())
}
