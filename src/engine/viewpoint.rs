use glam::Vec3;

use super::command::ViewpointId;
use crate::animation::{ActorPose, ActorPoses};

/// A complete snapshot of camera, clock, and actor state to jump to.
///
/// Camera position is in scaled render units, like
/// [`CameraState::position`](crate::camera::CameraState::position).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    /// Frame counter to set.
    pub frame: i64,
    /// Camera offset.
    pub camera_position: Vec3,
    /// Camera heading in degrees.
    pub heading: f32,
    /// Actor poses to set.
    pub poses: ActorPoses,
}

const VIEWPOINT_A: Viewpoint = Viewpoint {
    frame: 605,
    camera_position: Vec3::new(0.004_524, 0.000_052, 0.007_764),
    heading: 306.0,
    poses: ActorPoses {
        airplane: ActorPose {
            prior: Vec3::new(0.0, -0.871_533, -1.577_791),
            rotation: Vec3::new(312.0, 0.0, 13.651_09),
            post: Vec3::new(0.0, -0.442_44, 0.0),
        },
        eagle: ActorPose {
            prior: Vec3::new(-1.0, 0.03, 0.4),
            rotation: Vec3::new(0.0, 0.0, 18.295_479),
            post: Vec3::new(0.0, -0.293_748, 0.0),
        },
    },
};

const VIEWPOINT_B: Viewpoint = Viewpoint {
    frame: -1,
    camera_position: Vec3::new(0.000_094, -0.000_036, -0.000_103),
    heading: 42.0,
    poses: ActorPoses::start(),
};

const VIEWPOINT_C: Viewpoint = Viewpoint {
    frame: 224,
    camera_position: Vec3::new(0.001_829, -0.000_004, 0.002_98),
    heading: 138.0,
    poses: ActorPoses {
        airplane: ActorPose {
            prior: Vec3::ZERO,
            rotation: Vec3::new(0.0, 0.0, 267.401_61),
            post: Vec3::new(0.0, -0.5829, 0.0),
        },
        eagle: ActorPose {
            prior: Vec3::new(-1.0, 0.03, 0.4),
            rotation: Vec3::new(0.0, 0.0, 43.981_647),
            post: Vec3::new(0.0, 0.000_001, 0.0),
        },
    },
};

impl ViewpointId {
    /// All viewpoints.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// The snapshot this id names.
    #[must_use]
    pub const fn viewpoint(self) -> Viewpoint {
        match self {
            Self::A => VIEWPOINT_A,
            Self::B => VIEWPOINT_B,
            Self::C => VIEWPOINT_C,
        }
    }
}
