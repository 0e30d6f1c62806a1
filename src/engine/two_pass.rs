//! Two-pass bitrate-controlled encode

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::domain::errors::DomainError;
use crate::domain::model::EncodePlan;
use crate::engine::passlog::PassLog;
use crate::error::{ShrinkError, ShrinkResult};
use crate::ports::{ExecutePort, ToolInvocation};

/// Where pass 1 writes its discarded output
#[cfg(windows)]
pub const NULL_SINK: &str = "NUL";
#[cfg(not(windows))]
pub const NULL_SINK: &str = "/dev/null";

/// Video codec used by both passes
pub const VIDEO_CODEC: &str = "libx264";

/// Audio codec of the final pass
pub const AUDIO_CODEC: &str = "aac";

/// The two encoder passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodePass {
    /// Statistics only, no audio, output discarded
    Analysis,
    /// Real output, reusing the statistics
    Final,
}

impl EncodePass {
    pub fn number(self) -> u8 {
        match self {
            EncodePass::Analysis => 1,
            EncodePass::Final => 2,
        }
    }
}

/// Rate control shared by both passes: target = maxrate, bufsize = 2x target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateControl {
    pub video_kbps: u64,
}

impl RateControl {
    /// Saturates instead of overflowing for absurdly large targets
    pub fn bufsize_kbps(self) -> u64 {
        self.video_kbps.saturating_mul(2)
    }

    pub fn args(self) -> Vec<String> {
        vec![
            "-b:v".to_string(),
            format!("{}k", self.video_kbps),
            "-maxrate".to_string(),
            format!("{}k", self.video_kbps),
            "-bufsize".to_string(),
            format!("{}k", self.bufsize_kbps()),
        ]
    }
}

/// Aspect-preserving downscale filter with an even width
pub fn scale_filter(max_height: u32) -> String {
    format!("scale=-2:{}", max_height)
}

/// Summary of a finished encode
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeReport {
    pub output: PathBuf,
    pub elapsed: Duration,
}

/// Runs the analysis and final passes through an [`ExecutePort`]
pub struct TwoPassEncoder<E> {
    exec: E,
    ffmpeg: PathBuf,
    preset: String,
}

impl<E: ExecutePort> TwoPassEncoder<E> {
    pub fn new(exec: E, ffmpeg: impl Into<PathBuf>, preset: impl Into<String>) -> Self {
        Self {
            exec,
            ffmpeg: ffmpeg.into(),
            preset: preset.into(),
        }
    }

    /// Encoder command line for one pass
    pub fn pass_invocation(
        &self,
        plan: &EncodePlan,
        video_kbps: u64,
        pass: EncodePass,
        passlog_base: &Path,
    ) -> ToolInvocation {
        let mut invocation = ToolInvocation::new(&self.ffmpeg)
            .args(["-hide_banner", "-nostdin", "-y", "-i"])
            .arg(plan.input().as_path());

        if let Some(height) = plan.max_height() {
            invocation = invocation.arg("-vf").arg(scale_filter(height));
        }

        invocation = invocation
            .args(["-c:v", VIDEO_CODEC])
            .args(RateControl { video_kbps }.args())
            .arg("-pass")
            .arg(pass.number().to_string())
            .arg("-passlogfile")
            .arg(passlog_base)
            .arg("-preset")
            .arg(self.preset.clone());

        match pass {
            EncodePass::Analysis => invocation.args(["-an", "-f", "mp4", NULL_SINK]),
            EncodePass::Final => invocation
                .args(["-movflags", "+faststart", "-c:a", AUDIO_CODEC, "-b:a"])
                .arg(format!("{}k", plan.audio().kbps()))
                .arg(plan.output().as_path()),
        }
    }

    /// Encode without progress notifications
    pub fn encode(&self, plan: &EncodePlan, video_kbps: u64) -> ShrinkResult<EncodeReport> {
        self.encode_with_progress(plan, video_kbps, |_| Ok(()))
    }

    /// Run pass 1 then pass 2, calling `on_pass` before each.
    ///
    /// The pass-log artifacts are removed on every return path. A failing
    /// pass stops the sequence and its captured output is returned in
    /// [`ShrinkError::EncodeError`]; an error from `on_pass` stops it too.
    pub fn encode_with_progress<F: FnMut(EncodePass) -> io::Result<()>>(
        &self,
        plan: &EncodePlan,
        video_kbps: u64,
        mut on_pass: F,
    ) -> ShrinkResult<EncodeReport> {
        if video_kbps == 0 {
            return Err(DomainError::ValidationFailed(
                "Video bitrate must be positive".to_string(),
            )
            .into());
        }

        let output = plan.output().as_path();
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let started = Instant::now();
        let passlog = PassLog::for_output(output);
        info!(
            input = %plan.input(),
            output = %plan.output(),
            video_kbps,
            passlog = %passlog.base().display(),
            "Starting two-pass encode"
        );

        for pass in [EncodePass::Analysis, EncodePass::Final] {
            on_pass(pass)?;
            self.run_pass(plan, video_kbps, pass, &passlog)?;
        }

        drop(passlog);
        let elapsed = started.elapsed();
        info!(elapsed_secs = elapsed.as_secs_f64(), "Two-pass encode finished");
        Ok(EncodeReport {
            output: output.to_path_buf(),
            elapsed,
        })
    }

    fn run_pass(
        &self,
        plan: &EncodePlan,
        video_kbps: u64,
        pass: EncodePass,
        passlog: &PassLog,
    ) -> ShrinkResult<()> {
        let invocation = self.pass_invocation(plan, video_kbps, pass, passlog.base());
        info!(pass = pass.number(), "Running encode pass");

        let output = self.exec.run(&invocation).map_err(|e| ShrinkError::EncodeError {
            pass: pass.number(),
            message: format!("failed to start {}: {}", invocation, e),
        })?;

        if !output.success() {
            error!(pass = pass.number(), code = ?output.code, "Encode pass failed");
            return Err(ShrinkError::EncodeError {
                pass: pass.number(),
                message: output.failure_report(&invocation),
            });
        }
        Ok(())
    }
}
