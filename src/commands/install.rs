use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::archive::ArchiveTool;
use crate::error::Error;
use crate::package::{InstallRecord, StoreLayout, store};
use crate::runtime::Runtime;

/// Extract a package archive into its store root and drop a convenience
/// symlink in the current directory.
///
/// Installing an already-installed package is a reported no-op, so the
/// operation can be retried freely.
#[tracing::instrument(skip(runtime, tool, layout))]
pub fn install<R: Runtime, A: ArchiveTool>(
    runtime: &R,
    tool: &A,
    package: &Path,
    layout: &StoreLayout,
) -> Result<()> {
    if !runtime.exists(package) {
        return Err(Error::ArchiveNotFound(package.to_path_buf()).into());
    }
    if !tool.is_rpm(package)? {
        return Err(Error::NotAnArchive(package.to_path_buf()).into());
    }

    let archive_path = runtime.canonicalize(package)?;
    let record = InstallRecord::resolve(&archive_path, layout)?;

    if runtime.exists(&record.store_path) {
        println!("{} is already installed", package.display());
        return Ok(());
    }

    println!("[Install] {}", record.base_name);
    println!("  Install: start");
    expand_into_store(runtime, tool, &record)?;

    // The move is skipped when extraction yields no payload; existence of
    // the store path is the single source of truth for the outcome.
    if runtime.exists(&record.store_path) {
        println!("  Install: completed successfully");
        link_to_cwd(runtime, &record)?;
    } else {
        println!("  Install: failed");
    }
    Ok(())
}

/// Extract into a scratch directory, then move the payload subtree into
/// the store. The scratch directory is removed on every exit path by its
/// Drop impl.
fn expand_into_store<R: Runtime, A: ArchiveTool>(
    runtime: &R,
    tool: &A,
    record: &InstallRecord,
) -> Result<()> {
    store::ensure_root(runtime, &record.store_root)?;

    let scratch = tempfile::tempdir().context("failed to create scratch directory")?;
    let expand_dir = scratch.path().join("expand");
    runtime.create_dir_all(&expand_dir)?;

    tool.extract(&record.archive_path, &expand_dir)?;

    let payload = match record.kind.payload_subpath() {
        Some(subpath) => expand_dir.join(subpath),
        None => expand_dir,
    };
    if runtime.is_dir(&payload) {
        store::adopt(runtime, &payload, &record.store_path)?;
    } else {
        debug!("extracted tree has no payload at {:?}", payload);
    }
    Ok(())
}

/// Leave a symlink to the freshly installed package next to where the
/// user ran the command. Anything already occupying the name, including a
/// dangling symlink, is left alone.
fn link_to_cwd<R: Runtime>(runtime: &R, record: &InstallRecord) -> Result<()> {
    let dest = runtime.current_dir()?.join(&record.base_name);
    debug!(
        "try to make link from {:?} to {:?}",
        record.store_path, dest
    );
    if runtime.exists(&dest) || runtime.is_symlink(&dest) {
        debug!("{:?} already exists, leaving it as is", dest);
        return Ok(());
    }
    println!("[Link] {}", record.base_name);
    runtime.symlink(&record.store_path, &dest)
}
