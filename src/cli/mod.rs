//! CLI module for ShrinkX
//!
//! The tool is fully interactive: the command line carries no operational
//! flags, only `--help` and `--version`. Everything else happens through
//! the line-oriented [`Terminal`].

use clap::Parser;

pub mod terminal;

pub use terminal::{MenuEntry, Terminal};

/// ShrinkX interactive video shrinker
///
/// Pick a video, enter a target size in MB, and the file is re-encoded with a
/// two-pass H.264/AAC encode sized to fit.
///
/// Environment: SHRINKX_FFMPEG, SHRINKX_FFPROBE, SHRINKX_PRESET, SHRINKX_HOME,
/// SHRINKX_SHARED_DIR, SHRINKX_LOG, SHRINKX_LOG_FORMAT.
#[derive(Parser, Debug)]
#[command(name = "shrinker")]
#[command(about = "ShrinkX - re-encode a video to fit a target size")]
#[command(version)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_accepts_no_arguments() {
        assert!(Cli::try_parse_from(["shrinker"]).is_ok());
        assert!(Cli::try_parse_from(["shrinker", "--input", "a.mp4"]).is_err());
    }
}
