//! Authored motion tables for the two actors.
//!
//! Each entry is active on a half-open tick range and folds one curve into
//! one pose field. Several entries may be active on the same tick; they are
//! applied in table order, so a `Set` followed by an `Add` on the same
//! field offsets from a fixed base.

use std::ops::Range;

use super::interpolation::{MotionCurve, MotionOp, PI};
use super::state::{
    ActorPose,
    Axis::{X, Y, Z},
    PoseChannel::{self, Post, Prior, Rotation},
};

/// One gated contribution to a pose field.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionTrack {
    /// Name of the authored segment the entry belongs to.
    pub segment: &'static str,
    /// Active ticks, half-open.
    pub ticks: Range<u32>,
    /// Target field.
    pub channel: PoseChannel,
    /// Accumulate or overwrite.
    pub op: MotionOp,
    /// Value source.
    pub curve: MotionCurve,
}

impl MotionTrack {
    /// Whether the entry contributes on `tick`.
    #[inline]
    #[must_use]
    pub fn is_active(&self, tick: u32) -> bool {
        self.ticks.contains(&tick)
    }

    /// Fold this entry into `pose` if active on `tick`.
    pub fn apply(&self, tick: u32, pose: &mut ActorPose) {
        if self.is_active(tick) {
            self.op
                .apply(pose.channel_mut(self.channel), self.curve.evaluate(tick));
        }
    }
}

const fn add(
    segment: &'static str,
    ticks: Range<u32>,
    channel: PoseChannel,
    curve: MotionCurve,
) -> MotionTrack {
    MotionTrack {
        segment,
        ticks,
        channel,
        op: MotionOp::Add,
        curve,
    }
}

const fn set(
    segment: &'static str,
    ticks: Range<u32>,
    channel: PoseChannel,
    value: f64,
) -> MotionTrack {
    MotionTrack {
        segment,
        ticks,
        channel,
        op: MotionOp::Set,
        curve: MotionCurve::Constant(value),
    }
}

/// Airplane: a gentle sway for the whole cycle, a barrel roll out and
/// back, then a dive, a full loop and a recovery.
pub const AIRPLANE_TRACKS: &[MotionTrack] = &[
    add("sway", 0..720, Rotation(Z), MotionCurve::cosine(-1.0, 4.0)),
    add("sway", 0..720, Post(Y), MotionCurve::cosine(-0.02, 2.0)),
    add("invert spin", 90..180, Rotation(Z), MotionCurve::sine(-PI, 2.0)),
    add("recover spin", 180..270, Rotation(Z), MotionCurve::sine(PI, 2.0)),
    add("dive", 360..450, Rotation(X), MotionCurve::sine(-0.5 * PI, 4.0)),
    add("dive", 360..450, Prior(Y), MotionCurve::sine(-0.01 * PI, 2.0)),
    add("dive", 360..450, Prior(Z), MotionCurve::sine(-0.02 * PI, 1.0)),
    add("loop", 450..630, Rotation(X), MotionCurve::Constant(2.0)),
    add(
        "loop",
        450..630,
        Prior(Y),
        MotionCurve::sine_from(0.03 * PI, 2.0, -90.0),
    ),
    add(
        "loop",
        450..630,
        Prior(Z),
        MotionCurve::cosine_from(-0.03 * PI, 2.0, -90.0),
    ),
    add(
        "recovery",
        630..720,
        Rotation(X),
        MotionCurve::sine(-0.25 * PI, 4.0),
    ),
    add("recovery", 630..720, Prior(Y), MotionCurve::sine(-0.01 * PI, 2.0)),
    add("recovery", 630..720, Prior(Z), MotionCurve::sine(-0.02 * PI, 1.0)),
];

/// Eagle: flaps in from its start spot, glides beside the airplane,
/// dodges it, swings out sideways and returns for the next cycle.
pub const EAGLE_TRACKS: &[MotionTrack] = &[
    set("default glide", 0..720, Prior(X), -1.0),
    set("default glide", 0..720, Prior(Z), 0.4),
    set("wing start", 0..90, Prior(X), -0.5),
    set("wing start", 0..90, Prior(Y), 0.03),
    set("wing start", 0..90, Prior(Z), -0.1),
    add("wing sync", 0..45, Rotation(Z), MotionCurve::cosine(-1.0, 4.0)),
    add("wing sync", 0..45, Post(Y), MotionCurve::sine(-0.018, 4.0)),
    add("reposition", 45..90, Prior(X), MotionCurve::ramp(-0.5 / 45.0, 45.0)),
    add("reposition", 45..90, Prior(Z), MotionCurve::ramp(0.5 / 45.0, 45.0)),
    add(
        "reposition",
        45..90,
        Post(Y),
        MotionCurve::sine_from(0.018, 4.0, -45.0),
    ),
    add("sway", 45..675, Rotation(Z), MotionCurve::cosine_from(-1.0, 2.0, 45.0)),
    add("sway", 45..675, Post(Y), MotionCurve::cosine_from(-0.02, 4.0, 45.0)),
    add(
        "collision avoidance",
        180..270,
        Rotation(Z),
        MotionCurve::sine(0.5 * PI, 4.0),
    ),
    add("side glide", 360..540, Prior(X), MotionCurve::sine(0.4 * PI, 1.0)),
    add(
        "return to start",
        675..720,
        Prior(X),
        MotionCurve::ramp(0.5 / 45.0, 675.0),
    ),
    add(
        "return to start",
        675..720,
        Prior(Z),
        MotionCurve::ramp(-0.5 / 45.0, 675.0),
    ),
    add("nudge up", 700..710, Prior(Y), MotionCurve::Constant(0.01)),
    add("nudge down", 710..720, Prior(Y), MotionCurve::Constant(-0.01)),
];
