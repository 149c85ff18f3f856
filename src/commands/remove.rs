use anyhow::Result;
use log::debug;

use crate::commands::{confirm_targets, display_name};
use crate::package::StoreLayout;
use crate::runtime::Runtime;

/// Remove installed packages matching a name or glob, after interactive
/// confirmation. An empty pattern matches nothing.
#[tracing::instrument(skip(runtime, layout))]
pub fn remove<R: Runtime>(runtime: &R, name: &str, layout: &StoreLayout) -> Result<()> {
    debug!("removing store entries matching '{}'", name);

    let Some(targets) = confirm_targets(runtime, layout, name)? else {
        return Ok(());
    };

    for path in targets {
        println!("[Remove] {}", display_name(&path));
        runtime.remove_dir_all(&path)?;
    }
    Ok(())
}
