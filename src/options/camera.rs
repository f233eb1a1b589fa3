use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera start pose, control rates, and projection parameters.
///
/// Positions and rates are in normalized scene units; the scene's
/// `world_scale` converts them into render units.
pub struct CameraOptions {
    /// Start position in normalized units (scene bounds are -0.5..0.5).
    #[schemars(skip)]
    pub start_position: [f32; 3],
    /// Start heading in degrees.
    #[schemars(title = "Start Heading", range(min = 0.0, max = 359.0), extend("step" = 1.0))]
    pub start_heading: f32,
    /// Start forward momentum in normalized units per frame.
    #[schemars(title = "Start Momentum", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub start_momentum: f32,
    /// Turn rate in degrees per second while a turn key is held.
    #[schemars(title = "Turn Speed", range(min = 10.0, max = 400.0), extend("step" = 10.0))]
    pub rotation_speed: f32,
    /// Climb rate in normalized units per second.
    #[schemars(title = "Climb Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub elevation_speed: f32,
    /// Momentum gained per second while accelerating.
    #[schemars(title = "Acceleration", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub acceleration: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    #[schemars(skip)]
    pub aspect: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            start_position: [-0.6, -0.2, -1.8],
            start_heading: 330.0,
            start_momentum: 0.15,
            rotation_speed: 100.0,
            elevation_speed: 2.0,
            acceleration: 0.1,
            fovy: 90.0,
            aspect: 1.0,
            znear: 0.000_01,
        }
    }
}
