use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Clouds", inline)]
#[serde(default)]
/// Cloud field tiling, tessellation, and layer placement.
pub struct CloudOptions {
    /// Tiles along X.
    #[schemars(title = "Tiles X", range(min = 1, max = 64))]
    pub tiles_x: u32,
    /// Tiles along Z.
    #[schemars(title = "Tiles Z", range(min = 1, max = 64))]
    pub tiles_z: u32,
    /// Polygon sections per disk.
    #[schemars(title = "Disk Sections", range(min = 3, max = 64))]
    pub sections: u32,
    /// Height of the two inner layers (above and below).
    #[schemars(title = "Inner Layer", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub inner_layer: f32,
    /// Height of the two outer layers (above and below).
    #[schemars(title = "Outer Layer", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub outer_layer: f32,
    /// Texture applied to every disk.
    #[schemars(skip)]
    pub texture: String,
}

impl Default for CloudOptions {
    fn default() -> Self {
        Self {
            tiles_x: 16,
            tiles_z: 16,
            sections: 16,
            inner_layer: 0.2,
            outer_layer: 0.8,
            texture: "resources/textures/cloud.jpeg".into(),
        }
    }
}
