//! Common utilities and helpers

use std::time::Duration;

/// Utility functions for ShrinkX
pub struct Utils;

impl Utils {
    /// Wall-clock time of an encode, e.g. `1h 02m 03s`, `4m 05s` or `12.3s`
    pub fn format_elapsed(elapsed: Duration) -> String {
        let secs = elapsed.as_secs();
        match (secs / 3600, secs % 3600 / 60, secs % 60) {
            (0, 0, _) => format!("{:.1}s", elapsed.as_secs_f64()),
            (0, m, s) => format!("{}m {:02}s", m, s),
            (h, m, s) => format!("{}h {:02}m {:02}s", h, m, s),
        }
    }

    /// Human-readable size in binary units, two decimals above one KB
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
        if bytes < 1024 {
            return format!("{} B", bytes);
        }

        let mut value = bytes as f64 / 1024.0;
        let mut unit = UNITS[0];
        for &next in &UNITS[1..] {
            if value < 1024.0 {
                break;
            }
            value /= 1024.0;
            unit = next;
        }
        format!("{:.2} {}", value, unit)
    }

    /// Bytes expressed in MiB, the unit target sizes are entered in
    pub fn bytes_to_mb(size: u64) -> f64 {
        size as f64 / (1024.0 * 1024.0)
    }
}
