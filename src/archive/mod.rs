//! External archive collaborators: the rpm file-type probe and the
//! `rpm2cpio | cpio` extraction pipeline.
//!
//! Both run external binaries; nothing in this module decodes archive
//! bytes itself.

use crate::error::Error;
use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Trait for the external archive tooling
#[cfg_attr(test, mockall::automock)]
pub trait ArchiveTool: Send + Sync {
    /// Probe whether the file at `path` is an rpm archive.
    fn is_rpm(&self, path: &Path) -> Result<bool>;

    /// Unpack the archive's full file tree into `dest`.
    fn extract(&self, archive: &Path, dest: &Path) -> Result<()>;
}

/// The real toolchain: `file` for probing, `rpm2cpio` piped into `cpio`
/// for extraction.
pub struct RpmCpio;

impl ArchiveTool for RpmCpio {
    #[tracing::instrument(skip(self))]
    fn is_rpm(&self, path: &Path) -> Result<bool> {
        let output = Command::new("file")
            .arg("-b")
            .arg(path)
            .stderr(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => anyhow::Error::from(Error::ToolMissing("file")),
                _ => anyhow::Error::from(e).context("failed to run file probe"),
            })?;
        Ok(String::from_utf8_lossy(&output.stdout).starts_with("RPM"))
    }

    #[tracing::instrument(skip(self))]
    fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        for tool in ["rpm2cpio", "cpio"] {
            if !command_on_path(tool) {
                return Err(Error::ToolMissing(tool).into());
            }
        }

        // rpm2cpio <archive> | cpio -id, run inside dest
        let mut unpack = Command::new("rpm2cpio")
            .arg(archive)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .context("failed to spawn rpm2cpio")?;
        let payload_stream = unpack
            .stdout
            .take()
            .context("failed to capture rpm2cpio output")?;

        let unarchive_status = Command::new("cpio")
            .arg("-id")
            .current_dir(dest)
            .stdin(Stdio::from(payload_stream))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .context("failed to spawn cpio")?;
        let unpack_status = unpack.wait().context("failed to wait for rpm2cpio")?;

        if !unpack_status.success() || !unarchive_status.success() {
            return Err(Error::ExtractionFailed(archive.to_path_buf()).into());
        }
        Ok(())
    }
}

/// `which`-based availability probe, used to fail fast before the pipe is
/// spawned.
fn command_on_path(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_on_path_finds_shell() {
        assert!(command_on_path("sh"));
    }

    #[test]
    fn test_command_on_path_rejects_unknown_tool() {
        assert!(!command_on_path("rpmstash-no-such-tool"));
    }
}
