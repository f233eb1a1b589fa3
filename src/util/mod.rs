//! Shared utilities.

/// Fixed-rate frame pacing.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
