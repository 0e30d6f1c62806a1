//! Interactive file browser
//!
//! A single cursor (`current`) moves over the filesystem. Every iteration
//! re-lists the current directory and interprets the next command against
//! that fresh listing, so ordinals typed against an older screen are never
//! reused. Browsing ends only by cancellation or by selecting a video.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cli::terminal::{display_or, Terminal};
use crate::domain::model::MediaPath;
use crate::error::{ShrinkError, ShrinkResult};
use crate::utils::Utils;

pub mod listing;

pub use listing::{entry_name, DirectoryListing};

/// Operator command at the browser prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Empty input: draw the screen again
    Redraw,
    Up,
    Home,
    Shared,
    Refresh,
    Quit,
    /// `D<n>`, 1-based
    Directory(usize),
    /// `V<n>`, 1-based
    Video(usize),
    Unknown,
}

impl BrowseCommand {
    /// Parse a command token, case-insensitively
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "" => return BrowseCommand::Redraw,
            ".." => return BrowseCommand::Up,
            "~" => return BrowseCommand::Home,
            "s" => return BrowseCommand::Shared,
            "r" => return BrowseCommand::Refresh,
            "q" => return BrowseCommand::Quit,
            _ => {}
        }

        let mut chars = input.chars();
        let (prefix, digits) = match chars.next() {
            Some(c) => (c.to_ascii_lowercase(), chars.as_str()),
            None => return BrowseCommand::Unknown,
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return BrowseCommand::Unknown;
        }
        match (prefix, digits.parse::<usize>()) {
            ('d', Ok(n)) => BrowseCommand::Directory(n),
            ('v', Ok(n)) => BrowseCommand::Video(n),
            _ => BrowseCommand::Unknown,
        }
    }
}

/// Result of applying one command
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseStep {
    /// Keep browsing (the cursor may have moved)
    Continue,
    /// Command rejected; the cursor did not move
    Invalid(String),
    Selected(MediaPath),
    Cancelled,
}

/// Stateful directory navigator
#[derive(Debug, Clone)]
pub struct FileBrowser {
    current: PathBuf,
    home: PathBuf,
    shared: PathBuf,
}

impl FileBrowser {
    /// Start browsing at `start`
    pub fn new(start: impl Into<PathBuf>, home: impl Into<PathBuf>, shared: impl Into<PathBuf>) -> Self {
        let start = start.into();
        let current = std::fs::canonicalize(&start).unwrap_or(start);
        Self {
            current,
            home: home.into(),
            shared: shared.into(),
        }
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    /// Apply `command` against the listing the operator was shown
    pub fn apply(&mut self, command: BrowseCommand, listing: &DirectoryListing) -> BrowseStep {
        debug!(?command, current = %self.current.display(), "Browser command");
        match command {
            BrowseCommand::Redraw | BrowseCommand::Refresh => BrowseStep::Continue,
            BrowseCommand::Quit => BrowseStep::Cancelled,
            BrowseCommand::Up => {
                if let Some(parent) = self.current.parent().filter(|p| !p.as_os_str().is_empty()) {
                    self.current = parent.to_path_buf();
                }
                BrowseStep::Continue
            }
            BrowseCommand::Home => {
                self.current = self.home.clone();
                BrowseStep::Continue
            }
            BrowseCommand::Shared => {
                if self.shared.is_dir() {
                    self.current = self.shared.clone();
                    BrowseStep::Continue
                } else {
                    BrowseStep::Invalid(format!(
                        "Shared storage not found: {}",
                        self.shared.display()
                    ))
                }
            }
            BrowseCommand::Directory(n) => match listing.directory(n) {
                Some(dir) => {
                    self.current = dir.clone();
                    BrowseStep::Continue
                }
                None => BrowseStep::Invalid("No such folder number.".to_string()),
            },
            BrowseCommand::Video(n) => match listing.video(n) {
                Some(video) => match MediaPath::existing(video) {
                    Ok(media) => BrowseStep::Selected(media),
                    Err(e) => BrowseStep::Invalid(e.to_string()),
                },
                None => BrowseStep::Invalid("No such video number.".to_string()),
            },
            BrowseCommand::Unknown => BrowseStep::Invalid("Unknown command.".to_string()),
        }
    }

    /// Run the interactive loop. `None` means the operator cancelled.
    pub fn browse<R: BufRead, W: Write>(
        &mut self,
        term: &mut Terminal<R, W>,
    ) -> ShrinkResult<Option<MediaPath>> {
        loop {
            let listing = DirectoryListing::read(&self.current);
            term.clear()?;
            self.render(term.out(), &listing)?;

            let answer = match term.ask("\nCommand (D#, V#, .., ~, S, R, Q): ") {
                Ok(answer) => answer,
                Err(ShrinkError::InputClosed) => {
                    info!("Input closed while browsing, cancelling");
                    return Ok(None);
                }
                Err(e) => return Err(e),
            };

            match self.apply(BrowseCommand::parse(&answer), &listing) {
                BrowseStep::Continue => {}
                BrowseStep::Cancelled => {
                    info!("Browsing cancelled");
                    return Ok(None);
                }
                BrowseStep::Selected(media) => {
                    info!(path = %media, "Video selected");
                    return Ok(Some(media));
                }
                BrowseStep::Invalid(message) => {
                    writeln!(term.out(), "{}", message)?;
                    term.pause()?;
                }
            }
        }
    }

    fn render<W: Write>(&self, out: &mut W, listing: &DirectoryListing) -> io::Result<()> {
        writeln!(out, "Pick a video file")?;
        writeln!(out, "=================")?;
        writeln!(out, "Current folder: {}\n", self.current.display())?;
        writeln!(out, "[..] up   [~] home   [S] shared   [R] refresh   [Q] quit\n")?;

        writeln!(out, "Folders:")?;
        if listing.directories.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for (i, dir) in listing.directories.iter().enumerate() {
            writeln!(out, "  D{:>2}) {}/", i + 1, entry_name(dir))?;
        }

        writeln!(out, "\nVideos:")?;
        if listing.videos.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for (i, video) in listing.videos.iter().enumerate() {
            let size = std::fs::metadata(video)
                .ok()
                .map(|meta| Utils::format_file_size(meta.len()));
            writeln!(
                out,
                "  V{:>2}) {}   ({})",
                i + 1,
                entry_name(video),
                display_or(size, "?")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(BrowseCommand::parse(""), BrowseCommand::Redraw);
        assert_eq!(BrowseCommand::parse(".."), BrowseCommand::Up);
        assert_eq!(BrowseCommand::parse("~"), BrowseCommand::Home);
        assert_eq!(BrowseCommand::parse("S"), BrowseCommand::Shared);
        assert_eq!(BrowseCommand::parse(" r "), BrowseCommand::Refresh);
        assert_eq!(BrowseCommand::parse("Q"), BrowseCommand::Quit);
        assert_eq!(BrowseCommand::parse("D1"), BrowseCommand::Directory(1));
        assert_eq!(BrowseCommand::parse("v12"), BrowseCommand::Video(12));
        assert_eq!(BrowseCommand::parse("V"), BrowseCommand::Unknown);
        assert_eq!(BrowseCommand::parse("V1a"), BrowseCommand::Unknown);
        assert_eq!(BrowseCommand::parse("X1"), BrowseCommand::Unknown);
        assert_eq!(BrowseCommand::parse("quit"), BrowseCommand::Unknown);
        assert_eq!(
            BrowseCommand::parse("V99999999999999999999999"),
            BrowseCommand::Unknown
        );
    }

    #[test]
    fn test_up_is_noop_at_root() {
        let root = PathBuf::from("/");
        let mut browser = FileBrowser::new(&root, &root, &root);
        let step = browser.apply(BrowseCommand::Up, &DirectoryListing::default());
        assert_eq!(step, BrowseStep::Continue);
        assert_eq!(browser.current(), Path::new("/"));
    }

    #[test]
    fn test_shared_requires_existing_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut browser = FileBrowser::new(dir.path(), dir.path(), dir.path().join("absent"));
        let before = browser.current().to_path_buf();
        let step = browser.apply(BrowseCommand::Shared, &DirectoryListing::default());
        assert!(matches!(step, BrowseStep::Invalid(_)));
        assert_eq!(browser.current(), before);
    }

    #[test]
    fn test_stale_video_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let listing = DirectoryListing {
            directories: vec![],
            videos: vec![dir.path().join("deleted.mp4")],
        };
        let mut browser = FileBrowser::new(dir.path(), dir.path(), dir.path());
        assert!(matches!(
            browser.apply(BrowseCommand::Video(1), &listing),
            BrowseStep::Invalid(_)
        ));
    }
}
