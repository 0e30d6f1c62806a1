//! Encoding engine
//!
//! Drives the external encoder through a two-pass, bitrate-capped encode and
//! owns the transient pass-log files that connect the passes.

pub mod passlog;
pub mod two_pass;

pub use passlog::PassLog;
pub use two_pass::{EncodePass, EncodeReport, RateControl, TwoPassEncoder};
