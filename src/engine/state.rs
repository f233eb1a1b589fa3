use serde::Serialize;

use crate::animation::{ActorPoses, AnimationClock};
use crate::camera::CameraState;
use crate::input::ControlSignals;
use crate::options::Options;

/// All mutable per-frame state of a fly-through, in one place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneState {
    /// Camera pose and momentum.
    pub camera: CameraState,
    /// Steering accumulators.
    pub signals: ControlSignals,
    /// Frame clock and pause flag.
    pub clock: AnimationClock,
    /// Actor poses.
    pub poses: ActorPoses,
    /// Momentum parked by the last pause, restored on resume.
    pub momentum_before_pause: f32,
}

impl SceneState {
    /// State at program start (and after a reset).
    #[must_use]
    pub fn startup(options: &Options) -> Self {
        Self {
            camera: CameraState::startup(&options.camera, &options.scene),
            signals: ControlSignals::default(),
            clock: AnimationClock::new(),
            poses: ActorPoses::start(),
            momentum_before_pause: 0.0,
        }
    }
}
