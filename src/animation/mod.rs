//! Keyframe timelines.
//!
//! A [`timeline::Timeline`] turns declared keyframes into per-frame deltas that telescope to the
//! exact payload, so a finished timeline carries no accumulated rounding drift.

pub mod keyframe;
pub mod timeline;
