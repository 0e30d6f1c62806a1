//! ShrinkX Video Shrinker Library
//!
//! Re-encodes a video down to an operator-chosen file size with a two-pass,
//! bitrate-capped ffmpeg encode. The operator picks the file in an
//! interactive browser and answers a few prompts; the planner derives the
//! video bitrate from the target size, the probed duration and the audio
//! bitrate.

pub mod adapters;
pub mod app;
pub mod browser;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod planner;
pub mod ports;
pub mod probe;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{AudioBitrate, EncodePlan, MediaPath, OutputLocation, ScaleLimit};
pub use error::{ShrinkError, ShrinkResult};
