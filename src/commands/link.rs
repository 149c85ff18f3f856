use anyhow::Result;
use log::debug;
use std::path::Path;

use crate::commands::{confirm_targets, display_name};
use crate::error::Error;
use crate::package::StoreLayout;
use crate::runtime::Runtime;

/// Symlink installed packages matching a name or glob into `dest_dir`
/// (the current directory when not given), after interactive
/// confirmation. Existing destination entries are silently left alone.
#[tracing::instrument(skip(runtime, layout))]
pub fn link<R: Runtime>(
    runtime: &R,
    name: &str,
    dest_dir: Option<&Path>,
    layout: &StoreLayout,
) -> Result<()> {
    let dest_dir = match dest_dir {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => runtime.current_dir()?,
    };
    if !runtime.is_dir(&dest_dir) {
        return Err(Error::NotADirectory(dest_dir).into());
    }

    println!("Destination: {}", dest_dir.display());

    let Some(targets) = confirm_targets(runtime, layout, name)? else {
        return Ok(());
    };

    for path in targets {
        let base = display_name(&path);
        let dest = dest_dir.join(&base);
        debug!("try to make link for {:?} at {:?}", path, dest);
        if runtime.exists(&dest) || runtime.is_symlink(&dest) {
            debug!("{:?} already exists, leaving it as is", dest);
            continue;
        }
        println!("[Link] {}", base);
        runtime.symlink(&path, &dest)?;
    }
    Ok(())
}
