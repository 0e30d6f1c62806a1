//! Pass-log artifacts shared by the two encoder passes

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Suffixes appended to the pass-log base by ffmpeg/x264: the statistics log
/// for stream 0, its macroblock-tree companion, their in-progress `.temp`
/// forms, and the bare names some builds use.
pub const ARTIFACT_SUFFIXES: &[&str] = &[
    "-0.log",
    "-0.log.mbtree",
    "-0.log.temp",
    "-0.log.mbtree.temp",
    "",
    ".mbtree",
];

/// Owner of the pass-log files for one encode; removes them when dropped
#[derive(Debug)]
pub struct PassLog {
    base: PathBuf,
}

impl PassLog {
    /// Pass-log base `<output>.passlog`, next to the output file
    pub fn for_output(output: &Path) -> Self {
        let mut base = OsString::from(output.as_os_str());
        base.push(".passlog");
        Self {
            base: PathBuf::from(base),
        }
    }

    /// Value for `-passlogfile`
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Every file the encoder may have created for this base
    pub fn artifacts(&self) -> Vec<PathBuf> {
        ARTIFACT_SUFFIXES
            .iter()
            .map(|suffix| {
                let mut name = OsString::from(self.base.as_os_str());
                name.push(suffix);
                PathBuf::from(name)
            })
            .collect()
    }

    /// Remove all artifacts; missing files are fine
    pub fn cleanup(&self) {
        for artifact in self.artifacts() {
            match std::fs::remove_file(&artifact) {
                Ok(()) => debug!("Removed pass-log artifact {}", artifact.display()),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => warn!("Failed to remove {}: {}", artifact.display(), e),
            }
        }
    }
}

impl Drop for PassLog {
    fn drop(&mut self) {
        self.cleanup();
    }
}
