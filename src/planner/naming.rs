//! Output file naming

use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::domain::errors::DomainError;
use crate::domain::model::MediaPath;

/// Container extension of every output
pub const OUTPUT_EXTENSION: &str = "mp4";

/// Target size rendered for a file name: two decimals, trailing zeros and a
/// bare trailing point removed
pub fn size_tag(target_mb: f64) -> String {
    let formatted = format!("{:.2}", target_mb);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// File name `<stem>_<tag>mb.mp4`. The stem is kept byte for byte.
pub fn output_file_name(stem: &OsStr, target_mb: f64) -> OsString {
    let mut name = stem.to_os_string();
    name.push(format!("_{}mb.{}", size_tag(target_mb), OUTPUT_EXTENSION));
    name
}

/// Full output path inside `out_dir`
pub fn output_path(input: &MediaPath, out_dir: &Path, target_mb: f64) -> Result<MediaPath, DomainError> {
    let stem = input.as_path().file_stem().unwrap_or_default();
    MediaPath::planned(out_dir.join(output_file_name(stem, target_mb)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_size_tag_trims_zeros() {
        assert_eq!(size_tag(9.0), "9");
        assert_eq!(size_tag(9.50), "9.5");
        assert_eq!(size_tag(9.25), "9.25");
        assert_eq!(size_tag(10.0), "10");
        assert_eq!(size_tag(100.0), "100");
        assert_eq!(size_tag(0.5), "0.5");
    }

    #[test]
    fn test_size_tag_rounds_to_two_decimals() {
        assert_eq!(size_tag(8.999), "9");
        assert_eq!(size_tag(7.125_1), "7.13");
    }

    #[test]
    fn test_output_path_forces_mp4() {
        let input = MediaPath::planned("/videos/trip.MKV").unwrap();
        let out = output_path(&input, Path::new("/out"), 9.5).unwrap();
        assert_eq!(out.as_path(), Path::new("/out/trip_9.5mb.mp4"));
    }

    #[test]
    fn test_output_path_of_already_tagged_input() {
        let input = MediaPath::planned("/videos/trip_9mb.mp4").unwrap();
        let out = output_path(&input, Path::new("/videos"), 9.0).unwrap();
        assert_eq!(out.as_path(), PathBuf::from("/videos/trip_9mb_9mb.mp4"));
        assert_ne!(out.as_path(), input.as_path());
    }

    #[cfg(unix)]
    #[test]
    fn test_output_path_keeps_non_utf8_stem() {
        use std::os::unix::ffi::OsStrExt;

        let input = MediaPath::planned(Path::new("/videos").join(OsStr::from_bytes(b"caf\xe9.mov"))).unwrap();
        let out = output_path(&input, Path::new("/out"), 10.0).unwrap();
        assert_eq!(
            out.as_path().file_name().map(OsStr::as_bytes),
            Some(&b"caf\xe9_10mb.mp4"[..])
        );
    }
}
