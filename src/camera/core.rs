use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::options::{CameraOptions, SceneOptions};
use crate::transform::{perspective, rotate_y, translate, wrap_degrees};

/// Camera position, heading, and forward momentum.
///
/// `position` is stored in scaled render units (normalized scene units
/// multiplied by the world scale), which is also the space the view
/// transform translates in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// World offset applied after the heading rotation.
    pub position: Vec3,
    /// Heading in degrees, always in `[0, 360)`.
    pub heading: f32,
    /// Forward speed per frame, never negative.
    pub momentum: f32,
}

impl CameraState {
    /// Build a state from literal values, wrapping the heading and
    /// clamping momentum.
    #[must_use]
    pub fn new(position: Vec3, heading: f32, momentum: f32) -> Self {
        Self {
            position,
            heading: wrap_degrees(heading),
            momentum: momentum.max(0.0),
        }
    }

    /// Startup pose from the configured normalized start values.
    #[must_use]
    pub fn startup(camera: &CameraOptions, scene: &SceneOptions) -> Self {
        Self::new(
            Vec3::from_array(camera.start_position) * scene.world_scale,
            camera.start_heading,
            camera.start_momentum * scene.world_scale,
        )
    }

    /// The "world moves, not camera" transform: `rotateY(heading) ·
    /// translate(position)`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        rotate_y(self.heading) * translate(
            self.position.x,
            self.position.y,
            self.position.z,
        )
    }

    /// Displacement applied to `position` per unit of momentum.
    #[must_use]
    pub fn travel_direction(&self) -> Vec3 {
        let (s, c) = self.heading.to_radians().sin_cos();
        Vec3::new(-s, 0.0, c)
    }

    /// Zero the momentum and return what it was.
    pub fn suspend(&mut self) -> f32 {
        std::mem::replace(&mut self.momentum, 0.0)
    }

    /// Restore momentum saved by [`suspend`](Self::suspend).
    pub fn resume(&mut self, momentum: f32) {
        self.momentum = momentum.max(0.0);
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Projection {
    /// Projection from the camera options, with the far plane placed at
    /// one unscaled world unit.
    #[must_use]
    pub fn from_options(camera: &CameraOptions, scene: &SceneOptions) -> Self {
        Self {
            fovy: camera.fovy,
            aspect: camera.aspect,
            znear: camera.znear,
            zfar: scene.zfar(),
        }
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn startup_is_scaled() {
        let state =
            CameraState::startup(&CameraOptions::default(), &SceneOptions::default());
        assert!((state.position.x - -0.6 * 0.0001).abs() < EPSILON);
        assert!((state.position.y - -0.2 * 0.0001).abs() < EPSILON);
        assert!((state.position.z - -1.8 * 0.0001).abs() < EPSILON);
        assert_eq!(state.heading, 330.0);
        assert!((state.momentum - 0.15 * 0.0001).abs() < EPSILON);
    }

    #[test]
    fn view_rotates_then_translates() {
        let state = CameraState::new(Vec3::new(1.0, 0.0, 0.0), 90.0, 0.0);
        // Translate first (local), then rotate 90 about Y: +X goes to -Z.
        let p = state.view_matrix().transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn travel_direction_follows_heading() {
        let ahead = CameraState::new(Vec3::ZERO, 0.0, 0.0);
        assert!((ahead.travel_direction() - Vec3::Z).length() < 1e-6);

        let turned = CameraState::new(Vec3::ZERO, 90.0, 0.0);
        assert!((turned.travel_direction() - Vec3::NEG_X).length() < 1e-6);
    }

    #[test]
    fn suspend_and_resume_momentum() {
        let mut state = CameraState::new(Vec3::ONE, 10.0, 0.5);
        let saved = state.suspend();
        assert_eq!(saved, 0.5);
        assert_eq!(state.momentum, 0.0);
        assert_eq!(state.position, Vec3::ONE);
        assert_eq!(state.heading, 10.0);

        state.resume(saved);
        assert_eq!(state.momentum, 0.5);
    }

    #[test]
    fn projection_far_plane_tracks_world_scale() {
        let projection = Projection::from_options(
            &CameraOptions::default(),
            &SceneOptions::default(),
        );
        assert!((projection.zfar - 10_000.0).abs() < 1e-2);
        assert_eq!(projection.fovy, 90.0);
    }
}
