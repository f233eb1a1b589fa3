//! Scripted actor motion keyed by a pausable frame clock.
//!
//! The clock yields a tick in `[0, 720)`; the motion engine maps each tick
//! onto the airplane and eagle poses using fixed, authored tables of
//! trigonometric curves.

/// The two actors and their start poses.
pub mod actor;
/// Motion curves and how they fold into a field.
pub mod interpolation;
/// Tick-driven pose updates.
pub mod runner;
/// Pose representation.
pub mod state;
/// Frame clock.
pub mod timeline;
/// Authored motion tables.
pub mod tracks;

pub use actor::{Actor, ActorPoses};
pub use interpolation::{MotionCurve, MotionOp, Wave};
pub use runner::ActorMotionEngine;
pub use state::{ActorPose, Axis, PoseChannel, EAGLE_START_PRIOR};
pub use timeline::{AnimationClock, CYCLE_TICKS, INITIAL_FRAME};
pub use tracks::{MotionTrack, AIRPLANE_TRACKS, EAGLE_TRACKS};
