//! Configuration initialization and hierarchy management
//!
//! There is no configuration file: every setting comes from the environment
//! or falls back to a default. Precedence is Env > Defaults.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ShrinkError, ShrinkResult};

/// Default x264 preset for both passes
pub const DEFAULT_PRESET: &str = "veryfast";

/// Environment variables consulted, with the setting each one overrides
pub const ENV_MAPPINGS: &[(&str, &str)] = &[
    ("SHRINKX_FFMPEG", "ffmpeg"),
    ("SHRINKX_FFPROBE", "ffprobe"),
    ("SHRINKX_PRESET", "preset"),
    ("SHRINKX_HOME", "home"),
    ("SHRINKX_SHARED_DIR", "shared_root"),
];

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Encoder executable
    pub ffmpeg: PathBuf,
    /// Prober executable
    pub ffprobe: PathBuf,
    /// x264 preset passed to both passes
    pub preset: String,
    /// Operator home directory
    pub home: PathBuf,
    /// External shared-storage mount point; may not exist
    pub shared_root: PathBuf,
}

impl AppConfig {
    /// Resolve configuration from the process environment
    pub fn from_env() -> ShrinkResult<Self> {
        Self::resolve(|key| std::env::var_os(key))
    }

    /// Resolve configuration from an arbitrary variable lookup.
    ///
    /// Fails with [`ShrinkError::ToolsMissing`] when ffmpeg or ffprobe cannot
    /// be located; this is the startup precondition check.
    pub fn resolve(lookup: impl Fn(&str) -> Option<OsString>) -> ShrinkResult<Self> {
        info!("Initializing configuration");

        let overrides = ENV_MAPPINGS
            .iter()
            .filter(|(var, _)| lookup(var).is_some())
            .inspect(|(var, key)| debug!("Found environment override: {} -> {}", var, key))
            .count();
        if overrides > 0 {
            info!("Applied {} environment variable overrides", overrides);
        }

        let ffmpeg = locate_tool("ffmpeg", lookup("SHRINKX_FFMPEG"));
        let ffprobe = locate_tool("ffprobe", lookup("SHRINKX_FFPROBE"));
        let (ffmpeg, ffprobe) = match (ffmpeg, ffprobe) {
            (Some(ffmpeg), Some(ffprobe)) => (ffmpeg, ffprobe),
            (ffmpeg, ffprobe) => {
                let missing: Vec<&str> = [("ffmpeg", ffmpeg.is_none()), ("ffprobe", ffprobe.is_none())]
                    .iter()
                    .filter(|(_, absent)| *absent)
                    .map(|(name, _)| *name)
                    .collect();
                return Err(ShrinkError::ToolsMissing {
                    tools: missing.join("/"),
                });
            }
        };

        let preset = lookup("SHRINKX_PRESET")
            .map(|v| v.to_string_lossy().trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PRESET.to_string());

        let home = lookup("SHRINKX_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        let shared_root = lookup("SHRINKX_SHARED_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| default_shared_root(&home));

        let config = Self {
            ffmpeg,
            ffprobe,
            preset,
            home,
            shared_root,
        };
        info!(
            ffmpeg = %config.ffmpeg.display(),
            ffprobe = %config.ffprobe.display(),
            preset = %config.preset,
            "Configuration initialized"
        );
        Ok(config)
    }

    /// Directory the browser opens in: shared storage when mounted, else home
    pub fn start_dir(&self) -> PathBuf {
        if self.shared_root.is_dir() {
            self.shared_root.clone()
        } else {
            self.home.clone()
        }
    }
}

/// Shared storage location exposed under the home directory on Termux
pub fn default_shared_root(home: &Path) -> PathBuf {
    home.join("storage").join("shared")
}

/// Use the override when it points at an existing file, else search PATH
fn locate_tool(name: &str, custom: Option<OsString>) -> Option<PathBuf> {
    if let Some(custom) = custom.filter(|v| !v.is_empty()) {
        let path = PathBuf::from(custom);
        if path.is_file() {
            return Some(path);
        }
        debug!("Override for {} does not exist: {}", name, path.display());
    }
    which::which(name).ok()
}
