//! Output verification
//!
//! Two-pass rate control is approximate, so a finished file may land a little
//! above the requested size. That is reported, never treated as a failure;
//! only a missing file is an error.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{ShrinkError, ShrinkResult};
use crate::utils::Utils;

/// What ended up on disk
#[derive(Debug, Clone, PartialEq)]
pub struct OutputReport {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub size_mb: f64,
    pub target_mb: f64,
    pub over_target: bool,
}

impl OutputReport {
    /// Advice lines shown when the file came out larger than asked for
    pub fn suggestions(&self) -> Vec<String> {
        if !self.over_target {
            return Vec::new();
        }
        vec![
            format!(
                "set target to {:.1} instead of {}",
                self.target_mb * 0.98,
                self.target_mb
            ),
            "choose audio 64 kbps".to_string(),
            "choose 720p/480p downscale".to_string(),
        ]
    }
}

/// Check the encoder's output against the requested size
pub fn verify_output(path: &Path, target_mb: f64) -> ShrinkResult<OutputReport> {
    let metadata = match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta,
        _ => {
            return Err(ShrinkError::OutputMissing {
                path: path.display().to_string(),
            })
        }
    };

    let size_bytes = metadata.len();
    let size_mb = Utils::bytes_to_mb(size_bytes);
    let over_target = size_mb > target_mb;
    if over_target {
        warn!(size_mb, target_mb, "Output is larger than the requested target");
    } else {
        info!(size_mb, target_mb, "Output within target");
    }

    Ok(OutputReport {
        path: path.to_path_buf(),
        size_bytes,
        size_mb,
        target_mb,
        over_target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_output_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = verify_output(&dir.path().join("none.mp4"), 9.0).unwrap_err();
        assert!(matches!(err, ShrinkError::OutputMissing { .. }));
    }

    #[test]
    fn test_over_target_is_reported_not_failed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.mp4");
        std::fs::write(&path, vec![0u8; 1024 * 1024 + 1]).unwrap();

        let report = verify_output(&path, 1.0).unwrap();
        assert!(report.over_target);
        assert_eq!(report.size_bytes, 1024 * 1024 + 1);
        assert_eq!(report.suggestions().len(), 3);
        assert!(report.suggestions()[0].contains("1.0 instead of 1"));

        let report = verify_output(&path, 1.5).unwrap();
        assert!(!report.over_target);
        assert!(report.suggestions().is_empty());
    }
}
