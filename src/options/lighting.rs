use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Sun and sun-reflection lights placed to match the skybox texture.
pub struct LightingOptions {
    /// Global ambient RGB.
    #[schemars(skip)]
    pub ambient: [f32; 3],
    /// Sun position on the unit skybox (w = 1).
    #[schemars(skip)]
    pub sun_position: [f32; 3],
    /// Sun diffuse intensity.
    #[schemars(title = "Sun Diffuse", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub sun_diffuse: f32,
    /// Sun specular intensity.
    #[schemars(title = "Sun Specular", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub sun_specular: f32,
    /// Reflection position on the unit skybox (w = 1).
    #[schemars(skip)]
    pub reflection_position: [f32; 3],
    /// Reflection brightness relative to the sun.
    #[schemars(title = "Reflection Strength", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub reflection_ratio: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient: [0.5, 0.5, 0.5],
            sun_position: [-1.0, 1.0, -1.0],
            sun_diffuse: 0.5,
            sun_specular: 0.7,
            reflection_position: [-1.0, -1.0, -1.0],
            reflection_ratio: 0.5,
        }
    }
}
