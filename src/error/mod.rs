//! Error handling module for ShrinkX

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for ShrinkX operations
#[derive(Error, Debug)]
pub enum ShrinkError {
    /// Required external tools are not installed
    #[error("{tools} not found. Install with: pkg install ffmpeg")]
    ToolsMissing { tools: String },

    /// Duration query failed or returned garbage
    #[error("Failed to probe media file {path}: {message}")]
    ProbeError { path: String, message: String },

    /// The audio track alone would use up the whole target size
    #[error(
        "Target size {target_mb} MB is too small for {audio_kbps} kbps audio over {duration_seconds:.2}s. \
         Pick a larger target MB or lower audio bitrate (48/64)."
    )]
    InfeasiblePlan {
        target_mb: f64,
        audio_kbps: u32,
        duration_seconds: f64,
    },

    /// An encoder pass exited unsuccessfully
    #[error("Encoding pass {pass}/2 failed: {message}")]
    EncodeError { pass: u8, message: String },

    /// Encoder reported success but nothing was written
    #[error("Output not created: {path}")]
    OutputMissing { path: String },

    /// Console input ended while a prompt was waiting for an answer
    #[error("Input closed before an answer was given")]
    InputClosed,

    /// Domain validation error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ShrinkError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            ShrinkError::ToolsMissing { .. } => 2,
            ShrinkError::ProbeError { .. } => 3,
            ShrinkError::InfeasiblePlan { .. } => 4,
            ShrinkError::EncodeError { .. } => 5,
            ShrinkError::OutputMissing { .. } => 6,
            ShrinkError::InputClosed | ShrinkError::Domain(_) | ShrinkError::IoError(_) => 1,
        }
    }
}

/// Result type alias for ShrinkX operations
pub type ShrinkResult<T> = std::result::Result<T, ShrinkError>;
