//! FFprobe adapter for media file probing
//!
//! This module provides the duration query used to plan the encode.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::model::MediaPath;
use crate::error::{ShrinkError, ShrinkResult};
use crate::ports::{ExecutePort, ProbePort};
use crate::probe::{duration_invocation, parse_duration};

/// FFprobe-based probe adapter
pub struct FfprobeAdapter<E> {
    ffprobe: PathBuf,
    exec: E,
}

impl<E: ExecutePort> FfprobeAdapter<E> {
    /// Create new FFprobe adapter
    pub fn new(ffprobe: impl Into<PathBuf>, exec: E) -> Self {
        Self {
            ffprobe: ffprobe.into(),
            exec,
        }
    }
}

impl<E: ExecutePort> ProbePort for FfprobeAdapter<E> {
    fn probe_duration_seconds(&self, path: &MediaPath) -> ShrinkResult<f64> {
        let invocation = duration_invocation(&self.ffprobe, path);
        let probe_error = |message: String| ShrinkError::ProbeError {
            path: path.to_string(),
            message,
        };

        let output = self
            .exec
            .run(&invocation)
            .map_err(|e| probe_error(format!("failed to start {}: {}", invocation, e)))?;

        if !output.success() {
            return Err(probe_error(output.failure_report(&invocation)));
        }

        let seconds = parse_duration(&output.stdout).map_err(|reason| {
            probe_error(format!("{}\n\n{}", reason, output.failure_report(&invocation)))
        })?;

        debug!(raw = output.stdout.trim(), "ffprobe duration output");
        info!(path = %path, seconds, "Probed media duration");
        Ok(seconds)
    }
}
