//! Encode planning
//!
//! Turns operator choices and the probed duration into an immutable
//! [`EncodePlan`](crate::domain::model::EncodePlan) plus the video bitrate
//! that makes the result fit the requested size.

pub mod bitrate;
pub mod builder;
pub mod naming;

pub use bitrate::{compute_video_kbps, BitratePlan};
pub use builder::{PlanBuilder, PlanChoices, PlannedEncode};
