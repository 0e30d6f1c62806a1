//! Interactive construction of an [`EncodePlan`]

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::cli::terminal::{MenuEntry, Terminal};
use crate::domain::model::{
    AudioBitrate, EncodePlan, MediaPath, OutputLocation, ScaleLimit, MIN_TARGET_MB,
};
use crate::error::{ShrinkError, ShrinkResult};
use crate::planner::bitrate::{compute_video_kbps, BitratePlan};
use crate::planner::naming;
use crate::ports::ProbePort;
use crate::utils::Utils;

/// Target size offered when the operator just presses Enter
pub const DEFAULT_TARGET_MB: f64 = 9.0;

/// Raw operator answers, before probing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanChoices {
    pub target_mb: f64,
    pub audio: AudioBitrate,
    pub scale: ScaleLimit,
    pub location: OutputLocation,
}

/// A validated plan together with the video bitrate that fits it
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedEncode {
    pub plan: EncodePlan,
    pub video_kbps: u64,
}

/// Collects operator choices and turns them into a plan
pub struct PlanBuilder<P> {
    probe: P,
    shared_root: PathBuf,
    home: PathBuf,
}

impl<P: ProbePort> PlanBuilder<P> {
    pub fn new(probe: P, shared_root: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            probe,
            shared_root: shared_root.into(),
            home: home.into(),
        }
    }

    /// Ask everything, probe the input and size the video stream
    pub fn build<R: BufRead, W: Write>(
        &self,
        input: MediaPath,
        term: &mut Terminal<R, W>,
    ) -> ShrinkResult<PlannedEncode> {
        let choices = self.collect_choices(&input, term)?;
        term.clear()?;
        self.resolve(input, choices)
    }

    /// Run the four prompt screens
    pub fn collect_choices<R: BufRead, W: Write>(
        &self,
        input: &MediaPath,
        term: &mut Terminal<R, W>,
    ) -> ShrinkResult<PlanChoices> {
        term.clear()?;
        term.heading("Target size")?;
        let current = std::fs::metadata(input.as_path())
            .map(|meta| Utils::format_file_size(meta.len()))
            .unwrap_or_else(|_| "?".to_string());
        writeln!(term.out(), "Selected: {}", input)?;
        writeln!(term.out(), "Current : {}\n", current)?;

        let target_mb = term.ask_float("Enter target size in MB", DEFAULT_TARGET_MB, MIN_TARGET_MB)?;

        let audio_entries: Vec<MenuEntry<AudioBitrate>> = AudioBitrate::ALL
            .iter()
            .map(|&a| MenuEntry::new(a.label(), a))
            .collect();
        let audio = term.pick(
            "Audio bitrate (kbps)",
            &audio_entries,
            default_index(&AudioBitrate::ALL, AudioBitrate::default()),
        )?;

        let scale_entries: Vec<MenuEntry<ScaleLimit>> = ScaleLimit::ALL
            .iter()
            .map(|&s| MenuEntry::new(s.label(), s))
            .collect();
        let scale = term.pick(
            "Downscale? (max height)",
            &scale_entries,
            default_index(&ScaleLimit::ALL, ScaleLimit::default()),
        )?;

        let location_entries: Vec<MenuEntry<OutputLocation>> = OutputLocation::ALL
            .iter()
            .map(|&l| MenuEntry::new(l.label(), l))
            .collect();
        let location = term.pick(
            "Output location",
            &location_entries,
            default_index(&OutputLocation::ALL, OutputLocation::default()),
        )?;

        let choices = PlanChoices {
            target_mb,
            audio,
            scale,
            location,
        };
        info!(?choices, "Collected plan choices");
        Ok(choices)
    }

    /// Probe the input and derive the video bitrate for `choices`
    pub fn resolve(&self, input: MediaPath, choices: PlanChoices) -> ShrinkResult<PlannedEncode> {
        let out_dir = choices.location.resolve(&input, &self.shared_root, &self.home);
        let output = naming::output_path(&input, &out_dir, choices.target_mb)?;

        let duration_seconds = self.probe.probe_duration_seconds(&input)?;
        let audio_kbps = choices.audio.kbps();

        let video_kbps = match compute_video_kbps(choices.target_mb, duration_seconds, audio_kbps) {
            BitratePlan::Feasible(kbps) if kbps > 0 => kbps,
            _ => {
                warn!(
                    target_mb = choices.target_mb,
                    audio_kbps, duration_seconds, "Target too small for chosen audio bitrate"
                );
                return Err(ShrinkError::InfeasiblePlan {
                    target_mb: choices.target_mb,
                    audio_kbps,
                    duration_seconds,
                });
            }
        };

        let plan = EncodePlan::new(
            input,
            output,
            choices.target_mb,
            choices.audio,
            choices.scale.max_height(),
            duration_seconds,
        )?;
        info!(
            input = %plan.input(),
            output = %plan.output(),
            video_kbps,
            "Encode plan ready"
        );
        Ok(PlannedEncode { plan, video_kbps })
    }
}

fn default_index<T: PartialEq>(all: &[T], default: T) -> usize {
    all.iter().position(|v| *v == default).unwrap_or(0)
}
