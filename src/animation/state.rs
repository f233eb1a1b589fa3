use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::transform::{rotate_x, rotate_y, rotate_z, translate, wrap_degrees};

/// Eagle prior translation at the start of every cycle.
pub const EAGLE_START_PRIOR: Vec3 = Vec3::new(-0.5, 0.03, -0.1);

/// Vector component of a pose field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// X component.
    X,
    /// Y component.
    Y,
    /// Z component.
    Z,
}

/// One scalar field of an [`ActorPose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseChannel {
    /// Translation applied before rotating.
    Prior(Axis),
    /// Euler angle in degrees.
    Rotation(Axis),
    /// Translation applied after rotating.
    Post(Axis),
}

/// Transform parameters of one animated actor.
///
/// Composition order is prior translation, rotation about X then Y then Z,
/// post translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActorPose {
    /// Translation applied before the rotations.
    pub prior: Vec3,
    /// Euler angles in degrees, each kept in `[0, 360)`.
    pub rotation: Vec3,
    /// Translation applied after the rotations.
    pub post: Vec3,
}

impl ActorPose {
    /// Identity pose.
    pub const IDENTITY: Self = Self {
        prior: Vec3::ZERO,
        rotation: Vec3::ZERO,
        post: Vec3::ZERO,
    };

    /// Start-of-cycle pose of the airplane.
    #[must_use]
    pub const fn airplane_start() -> Self {
        Self::IDENTITY
    }

    /// Start-of-cycle pose of the eagle.
    #[must_use]
    pub const fn eagle_start() -> Self {
        Self {
            prior: EAGLE_START_PRIOR,
            ..Self::IDENTITY
        }
    }

    /// Mutable access to a single field.
    pub fn channel_mut(&mut self, channel: PoseChannel) -> &mut f32 {
        let (v, axis) = match channel {
            PoseChannel::Prior(axis) => (&mut self.prior, axis),
            PoseChannel::Rotation(axis) => (&mut self.rotation, axis),
            PoseChannel::Post(axis) => (&mut self.post, axis),
        };
        match axis {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
            Axis::Z => &mut v.z,
        }
    }

    /// Read a single field.
    #[must_use]
    pub fn channel(&self, channel: PoseChannel) -> f32 {
        let mut copy = *self;
        *copy.channel_mut(channel)
    }

    /// Wrap all three Euler angles into `[0, 360)`.
    pub fn wrap_angles(&mut self) {
        self.rotation = Vec3::new(
            wrap_degrees(self.rotation.x),
            wrap_degrees(self.rotation.y),
            wrap_degrees(self.rotation.z),
        );
    }

    /// Local transform of the actor before any per-model correction.
    #[must_use]
    pub fn local_matrix(&self) -> Mat4 {
        translate(self.prior.x, self.prior.y, self.prior.z)
            * rotate_x(self.rotation.x)
            * rotate_y(self.rotation.y)
            * rotate_z(self.rotation.z)
            * translate(self.post.x, self.post.y, self.post.z)
    }
}

impl Default for ActorPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_starts() {
        assert_eq!(ActorPose::airplane_start(), ActorPose::IDENTITY);
        let eagle = ActorPose::eagle_start();
        assert_eq!(eagle.prior, Vec3::new(-0.5, 0.03, -0.1));
        assert_eq!(eagle.rotation, Vec3::ZERO);
        assert_eq!(eagle.post, Vec3::ZERO);
    }

    #[test]
    fn channel_access_hits_the_right_component() {
        let mut pose = ActorPose::IDENTITY;
        *pose.channel_mut(PoseChannel::Prior(Axis::Y)) = 1.0;
        *pose.channel_mut(PoseChannel::Rotation(Axis::Z)) = 2.0;
        *pose.channel_mut(PoseChannel::Post(Axis::X)) = 3.0;
        assert_eq!(pose.prior, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(pose.rotation, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(pose.post, Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(pose.channel(PoseChannel::Rotation(Axis::Z)), 2.0);
    }

    #[test]
    fn wrap_angles_leaves_translations() {
        let mut pose = ActorPose {
            prior: Vec3::splat(500.0),
            rotation: Vec3::new(-30.0, 360.0, 725.0),
            post: Vec3::splat(-500.0),
        };
        pose.wrap_angles();
        assert_eq!(pose.rotation, Vec3::new(330.0, 0.0, 5.0));
        assert_eq!(pose.prior, Vec3::splat(500.0));
        assert_eq!(pose.post, Vec3::splat(-500.0));
    }

    #[test]
    fn local_matrix_order() {
        let pose = ActorPose {
            prior: Vec3::new(1.0, 0.0, 0.0),
            rotation: Vec3::new(0.0, 0.0, 90.0),
            post: Vec3::new(1.0, 0.0, 0.0),
        };
        // Post translation is rotated by Z 90° onto +Y, then shifted by prior.
        let p = pose.local_matrix().transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-6, "{p}");
    }
}
