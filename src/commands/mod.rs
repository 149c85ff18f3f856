//! The four store operations.

mod install;
mod link;
mod list;
mod remove;

pub use install::install;
pub use link::link;
pub use list::list;
pub use remove::remove;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::package::{StoreLayout, selector};
use crate::runtime::Runtime;

/// Shared select-print-confirm flow for the destructive operations.
///
/// Returns `None` when there is nothing to do or the user declined —
/// both are normal, already-reported outcomes.
fn confirm_targets<R: Runtime>(
    runtime: &R,
    layout: &StoreLayout,
    pattern: &str,
) -> Result<Option<Vec<PathBuf>>> {
    let targets = selector::select(runtime, layout, pattern);
    if targets.is_empty() {
        println!("No Target.");
        return Ok(None);
    }

    println!("Target Files:");
    for path in &targets {
        println!("  {}", path.display());
    }
    println!();

    if !runtime.confirm()? {
        return Ok(None);
    }
    println!();
    Ok(Some(targets))
}

/// Basename for user-facing messages.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
