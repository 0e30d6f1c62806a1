//! Target-size bitrate arithmetic

/// Bits in one MB of target size (sizes are entered in MiB)
pub const BITS_PER_MB: f64 = 1024.0 * 1024.0 * 8.0;

/// Outcome of sizing the video stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitratePlan {
    /// Video bitrate in kbps, truncated toward zero
    Feasible(u64),
    /// The audio track alone fills the target
    Infeasible,
}

impl BitratePlan {
    pub fn kbps(self) -> Option<u64> {
        match self {
            BitratePlan::Feasible(kbps) => Some(kbps),
            BitratePlan::Infeasible => None,
        }
    }
}

/// Video bitrate that, together with the audio track, fills `target_mb`
/// over `duration_seconds`.
///
/// Truncates instead of rounding so the budget is never exceeded by the
/// arithmetic itself.
pub fn compute_video_kbps(target_mb: f64, duration_seconds: f64, audio_kbps: u32) -> BitratePlan {
    let target_bits = target_mb * BITS_PER_MB;
    let audio_bits = f64::from(audio_kbps) * 1000.0 * duration_seconds;
    let video_bits = target_bits - audio_bits;

    if video_bits <= 0.0 {
        return BitratePlan::Infeasible;
    }
    BitratePlan::Feasible((video_bits / duration_seconds / 1000.0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_mb_one_minute() {
        assert_eq!(compute_video_kbps(9.0, 60.0, 96), BitratePlan::Feasible(1162));
    }

    #[test]
    fn test_ten_mb_two_minutes() {
        assert_eq!(compute_video_kbps(10.0, 120.0, 96), BitratePlan::Feasible(603));
    }

    #[test]
    fn test_audio_fills_target() {
        assert_eq!(compute_video_kbps(0.5, 600.0, 128), BitratePlan::Infeasible);
        assert_eq!(BitratePlan::Infeasible.kbps(), None);
    }

    #[test]
    fn test_exact_audio_budget_is_infeasible() {
        // 1 MB = 8_388_608 bits; 64 kbps over 131.072 s uses exactly that.
        assert_eq!(compute_video_kbps(1.0, 131.072, 64), BitratePlan::Infeasible);
    }

    #[test]
    fn test_infeasible_iff_audio_consumes_budget() {
        let targets = [0.5, 1.0, 2.5, 9.0, 10.0, 25.0, 100.0];
        let durations = [1.0, 10.0, 59.9, 60.0, 120.0, 600.0, 3600.0];
        for &target in &targets {
            for &duration in &durations {
                for &audio in &[48u32, 64, 96, 128] {
                    let infeasible = target * 8.0 * 1024.0 * 1024.0 <= f64::from(audio) * 1000.0 * duration;
                    let plan = compute_video_kbps(target, duration, audio);
                    assert_eq!(
                        plan == BitratePlan::Infeasible,
                        infeasible,
                        "target={} duration={} audio={}",
                        target,
                        duration,
                        audio
                    );
                }
            }
        }
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 1162.29... kbps must not round to 1163
        let kbps = compute_video_kbps(9.0, 60.0, 96).kbps().unwrap();
        let exact = (9.0 * BITS_PER_MB - 96_000.0 * 60.0) / 60.0 / 1000.0;
        assert!((kbps as f64) <= exact);
        assert!(exact - (kbps as f64) < 1.0);
    }
}
