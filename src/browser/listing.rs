//! Snapshot of one directory's sub-directories and video files

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::model::has_video_extension;

/// Entries of a single directory, split and sorted case-insensitively by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    pub directories: Vec<PathBuf>,
    pub videos: Vec<PathBuf>,
}

impl DirectoryListing {
    /// List `dir`. Unreadable directories yield an empty listing.
    pub fn read(dir: &Path) -> Self {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot list {}: {}", dir.display(), e);
                return Self::default();
            }
        };

        let mut listing = Self::default();
        for entry in entries.filter_map(Result::ok) {
            let path = entry.path();
            if path.is_dir() {
                listing.directories.push(path);
            } else if path.is_file() && has_video_extension(&path) {
                listing.videos.push(path);
            }
        }

        listing.directories.sort_by_cached_key(|p| sort_key(p));
        listing.videos.sort_by_cached_key(|p| sort_key(p));
        debug!(
            dir = %dir.display(),
            directories = listing.directories.len(),
            videos = listing.videos.len(),
            "Listed directory"
        );
        listing
    }

    /// Directory for a 1-based ordinal
    pub fn directory(&self, ordinal: usize) -> Option<&PathBuf> {
        ordinal.checked_sub(1).and_then(|i| self.directories.get(i))
    }

    /// Video for a 1-based ordinal
    pub fn video(&self, ordinal: usize) -> Option<&PathBuf> {
        ordinal.checked_sub(1).and_then(|i| self.videos.get(i))
    }
}

fn sort_key(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Display name of a listed entry
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
