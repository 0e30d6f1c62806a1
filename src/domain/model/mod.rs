// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;


/// Extensions (lowercase, without dot) recognized as video files
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "mkv", "webm", "avi", "3gp", "m4v"];

/// Smallest target size accepted, in MB
pub const MIN_TARGET_MB: f64 = 0.5;

/// Check whether a path carries a recognized video extension
pub fn has_video_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Path to a video file with a recognized extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPath {
    path: PathBuf,
}

impl MediaPath {
    /// Wrap a path to an existing, readable video file
    pub fn existing(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if !has_video_extension(&path) {
            return Err(DomainError::UnsupportedFormat(path.display().to_string()));
        }
        if !path.is_file() {
            return Err(DomainError::FileNotFound(path.display().to_string()));
        }
        std::fs::File::open(&path).map_err(|e| {
            DomainError::FileNotFound(format!("{} ({})", path.display(), e))
        })?;
        Ok(Self { path })
    }

    /// Wrap a path that will be written later; only the extension is checked
    pub fn planned(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if !has_video_extension(&path) {
            return Err(DomainError::UnsupportedFormat(path.display().to_string()));
        }
        Ok(Self { path })
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// File name without extension
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Directory containing the file
    pub fn parent(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl AsRef<Path> for MediaPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for MediaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Audio track bitrate offered to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioBitrate {
    Kbps48,
    Kbps64,
    Kbps96,
    Kbps128,
}

impl AudioBitrate {
    /// Menu order
    pub const ALL: [AudioBitrate; 4] = [
        AudioBitrate::Kbps48,
        AudioBitrate::Kbps64,
        AudioBitrate::Kbps96,
        AudioBitrate::Kbps128,
    ];

    pub fn kbps(self) -> u32 {
        match self {
            AudioBitrate::Kbps48 => 48,
            AudioBitrate::Kbps64 => 64,
            AudioBitrate::Kbps96 => 96,
            AudioBitrate::Kbps128 => 128,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AudioBitrate::Kbps48 => "48 kbps (smallest, ok for voice)",
            AudioBitrate::Kbps64 => "64 kbps (small, decent)",
            AudioBitrate::Kbps96 => "96 kbps (default, good)",
            AudioBitrate::Kbps128 => "128 kbps (better, larger)",
        }
    }
}

impl Default for AudioBitrate {
    fn default() -> Self {
        AudioBitrate::Kbps96
    }
}

/// Maximum output height used for downscaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleLimit {
    #[default]
    Original,
    Max720,
    Max480,
    Max360,
}

impl ScaleLimit {
    pub const ALL: [ScaleLimit; 4] = [
        ScaleLimit::Original,
        ScaleLimit::Max720,
        ScaleLimit::Max480,
        ScaleLimit::Max360,
    ];

    pub fn max_height(self) -> Option<u32> {
        match self {
            ScaleLimit::Original => None,
            ScaleLimit::Max720 => Some(720),
            ScaleLimit::Max480 => Some(480),
            ScaleLimit::Max360 => Some(360),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScaleLimit::Original => "None (keep original)",
            ScaleLimit::Max720 => "720p max height",
            ScaleLimit::Max480 => "480p max height",
            ScaleLimit::Max360 => "360p max height",
        }
    }
}

/// Where the re-encoded file is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLocation {
    #[default]
    AlongsideInput,
    SharedMovies,
    Home,
}

impl OutputLocation {
    pub const ALL: [OutputLocation; 3] = [
        OutputLocation::AlongsideInput,
        OutputLocation::SharedMovies,
        OutputLocation::Home,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OutputLocation::AlongsideInput => "Same folder as input",
            OutputLocation::SharedMovies => "Shared storage /Movies (if exists)",
            OutputLocation::Home => "Home (~)",
        }
    }

    /// Resolve to a concrete directory
    pub fn resolve(self, input: &MediaPath, shared_root: &Path, home: &Path) -> PathBuf {
        match self {
            OutputLocation::AlongsideInput => input.parent(),
            OutputLocation::SharedMovies => {
                let movies = shared_root.join("Movies");
                if movies.is_dir() {
                    movies
                } else {
                    shared_root.to_path_buf()
                }
            }
            OutputLocation::Home => home.to_path_buf(),
        }
    }
}

/// Fully validated description of one encode job
#[derive(Debug, Clone, PartialEq)]
pub struct EncodePlan {
    input: MediaPath,
    output: MediaPath,
    target_mb: f64,
    audio: AudioBitrate,
    max_height: Option<u32>,
    duration_seconds: f64,
}

impl EncodePlan {
    /// Create a plan; every field is validated here and nowhere else
    pub fn new(
        input: MediaPath,
        output: MediaPath,
        target_mb: f64,
        audio: AudioBitrate,
        max_height: Option<u32>,
        duration_seconds: f64,
    ) -> Result<Self, DomainError> {
        if !target_mb.is_finite() || target_mb < MIN_TARGET_MB {
            return Err(DomainError::ValidationFailed(format!(
                "Target size must be >= {} MB, got {}",
                MIN_TARGET_MB, target_mb
            )));
        }
        if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
            return Err(DomainError::ValidationFailed(format!(
                "Duration must be positive, got {}",
                duration_seconds
            )));
        }
        if max_height == Some(0) {
            return Err(DomainError::ValidationFailed(
                "Maximum height must be positive".to_string(),
            ));
        }
        if input == output {
            return Err(DomainError::ValidationFailed(format!(
                "Output would overwrite the input: {}",
                input
            )));
        }

        Ok(Self {
            input,
            output,
            target_mb,
            audio,
            max_height,
            duration_seconds,
        })
    }

    pub fn input(&self) -> &MediaPath {
        &self.input
    }

    pub fn output(&self) -> &MediaPath {
        &self.output
    }

    pub fn target_mb(&self) -> f64 {
        self.target_mb
    }

    pub fn audio(&self) -> AudioBitrate {
        self.audio
    }

    pub fn max_height(&self) -> Option<u32> {
        self.max_height
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }
}
