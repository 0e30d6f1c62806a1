//! Media duration probing
//!
//! Builds the ffprobe invocation that prints nothing but the container
//! duration, and parses its single line of output.

use std::path::Path;

use crate::domain::model::MediaPath;
use crate::ports::ToolInvocation;

/// ffprobe invocation printing the format duration in seconds, bare
pub fn duration_invocation(ffprobe: &Path, path: &MediaPath) -> ToolInvocation {
    ToolInvocation::new(ffprobe)
        .args(["-v", "error", "-show_entries", "format=duration", "-of", "default=nw=1:nk=1"])
        .arg(path.as_path())
}

/// Parse prober output into a positive duration
pub fn parse_duration(stdout: &str) -> Result<f64, String> {
    let text = stdout.trim();
    let seconds: f64 = text
        .parse()
        .map_err(|_| format!("unparseable duration output: {:?}", text))?;

    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(format!("duration must be a positive number, got {:?}", text));
    }
    Ok(seconds)
}
