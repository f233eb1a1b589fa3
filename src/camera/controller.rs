use crate::camera::core::CameraState;
use crate::input::ControlSignals;
use crate::options::{CameraOptions, SceneOptions};
use crate::transform::wrap_degrees;

/// Per-frame control rates.
///
/// The configured per-second rates are divided by the nominal frame rate
/// and multiplied by the world scale once, up front, so stepping is a
/// handful of multiply-adds and on-screen speed is frame-rate independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRates {
    /// Degrees of heading per frame per unit of rotate signal.
    pub rotation: f32,
    /// Scaled units of height per frame per unit of elevate signal.
    pub elevation: f32,
    /// Scaled momentum per frame per unit of accelerate signal.
    pub acceleration: f32,
}

impl CameraRates {
    /// Derive per-frame rates from the options.
    #[must_use]
    pub fn from_options(camera: &CameraOptions, scene: &SceneOptions) -> Self {
        let fps = scene.fps.max(1) as f32;
        Self {
            rotation: camera.rotation_speed / fps,
            elevation: camera.elevation_speed * scene.world_scale / fps,
            acceleration: camera.acceleration * scene.world_scale / fps,
        }
    }
}

/// Integrates control signals into the camera state once per frame.
#[derive(Debug, Clone)]
pub struct CameraController {
    rates: CameraRates,
}

impl CameraController {
    /// Create a controller with explicit per-frame rates.
    #[must_use]
    pub fn new(rates: CameraRates) -> Self {
        Self { rates }
    }

    /// Create a controller from the camera and scene options.
    #[must_use]
    pub fn from_options(camera: &CameraOptions, scene: &SceneOptions) -> Self {
        Self::new(CameraRates::from_options(camera, scene))
    }

    /// The per-frame rates in use.
    #[must_use]
    pub fn rates(&self) -> CameraRates {
        self.rates
    }

    /// Advance `state` by one frame.
    ///
    /// Heading wraps into `[0, 360)`; momentum clamps at zero; the position
    /// moves along the updated heading by the updated momentum.
    pub fn step(&self, state: &mut CameraState, signals: &ControlSignals) {
        state.heading =
            wrap_degrees(state.heading + signals.rotate * self.rates.rotation);

        state.momentum = (state.momentum
            + signals.accelerate * self.rates.acceleration)
            .max(0.0);

        state.position += state.travel_direction() * state.momentum;
        state.position.y += signals.elevate * self.rates.elevation;
    }
}
