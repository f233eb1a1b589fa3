use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Frame rate and global scene transform parameters.
pub struct SceneOptions {
    /// Nominal frames per second. Control rates are divided by this so
    /// on-screen speed does not depend on the machine.
    #[schemars(title = "Frame Rate", range(min = 1, max = 240))]
    pub fps: u32,
    /// Uniform scale applied to the world after the camera transform.
    #[schemars(skip)]
    pub world_scale: f32,
    /// Scene rotation about +Y in degrees.
    #[schemars(title = "Scene Rotation", range(min = 0.0, max = 359.0), extend("step" = 1.0))]
    pub scene_rotation: f32,
    /// Depth the scene drifts per frame, in unscaled world units.
    #[schemars(title = "Dolly Speed", range(min = 0.0, max = 5000.0), extend("step" = 50.0))]
    pub dolly_per_frame: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            fps: 25,
            world_scale: 0.0001,
            scene_rotation: 30.0,
            dolly_per_frame: 1500.0,
        }
    }
}

impl SceneOptions {
    /// Far clipping distance: one world unit past the scaled scene.
    #[must_use]
    pub fn zfar(&self) -> f32 {
        1.0 / self.world_scale
    }
}
