use glam::Mat4;
use serde::Serialize;

use super::state::ActorPose;
use super::tracks::{MotionTrack, AIRPLANE_TRACKS, EAGLE_TRACKS};
use crate::transform::{rotate_x, rotate_y, rotate_z, scale};

/// The two scripted actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    /// Airplane model.
    Airplane,
    /// Eagle model.
    Eagle,
}

impl Actor {
    /// Both actors in draw order.
    pub const ALL: [Self; 2] = [Self::Airplane, Self::Eagle];

    /// Pose at tick 0.
    #[must_use]
    pub const fn start_pose(self) -> ActorPose {
        match self {
            Self::Airplane => ActorPose::airplane_start(),
            Self::Eagle => ActorPose::eagle_start(),
        }
    }

    /// Motion table, evaluated in order each tick.
    #[must_use]
    pub fn tracks(self) -> &'static [MotionTrack] {
        match self {
            Self::Airplane => AIRPLANE_TRACKS,
            Self::Eagle => EAGLE_TRACKS,
        }
    }

    /// Fixed orientation fix-up between the authored model axes and the
    /// scene axes, applied after the pose.
    #[must_use]
    pub fn model_correction(self) -> Mat4 {
        match self {
            Self::Airplane => rotate_x(270.0) * rotate_z(90.0),
            Self::Eagle => scale(0.5, 0.5, 0.5) * rotate_y(180.0),
        }
    }

    /// Short display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Airplane => "airplane",
            Self::Eagle => "eagle",
        }
    }
}

/// Current pose of every actor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActorPoses {
    /// Airplane pose.
    pub airplane: ActorPose,
    /// Eagle pose.
    pub eagle: ActorPose,
}

impl ActorPoses {
    /// Both actors at their start-of-cycle poses.
    #[must_use]
    pub const fn start() -> Self {
        Self {
            airplane: Actor::Airplane.start_pose(),
            eagle: Actor::Eagle.start_pose(),
        }
    }

    /// Pose of `actor`.
    #[must_use]
    pub fn get(&self, actor: Actor) -> &ActorPose {
        match actor {
            Actor::Airplane => &self.airplane,
            Actor::Eagle => &self.eagle,
        }
    }

    /// Mutable pose of `actor`.
    pub fn get_mut(&mut self, actor: Actor) -> &mut ActorPose {
        match actor {
            Actor::Airplane => &mut self.airplane,
            Actor::Eagle => &mut self.eagle,
        }
    }

    /// Return every actor to its start pose.
    pub fn reset(&mut self) {
        *self = Self::start();
    }
}

impl Default for ActorPoses {
    fn default() -> Self {
        Self::start()
    }
}
