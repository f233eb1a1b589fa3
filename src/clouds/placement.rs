use glam::Vec3;

use crate::options::CloudOptions;

/// Translation (in unscaled world units) that keeps the cloud grid
/// centred under the camera.
///
/// X and Z are truncated toward zero so the grid snaps by whole tiles and
/// never visibly slides; Y follows the camera continuously.
#[must_use]
pub fn follow_offset(camera_position: Vec3, world_scale: f32) -> Vec3 {
    let unscaled = -camera_position / world_scale;
    Vec3::new(unscaled.x.trunc(), unscaled.y, unscaled.z.trunc())
}

/// Vertical offsets of the four cloud layers, drawn in this order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudLayers {
    heights: [f32; 4],
}

impl CloudLayers {
    /// Layers at `±outer` and `±inner`, ordered outer-above, inner-above,
    /// inner-below, outer-below.
    #[must_use]
    pub fn new(inner: f32, outer: f32) -> Self {
        Self {
            heights: [outer, inner, -inner, -outer],
        }
    }

    /// Layers from the cloud options.
    #[must_use]
    pub fn from_options(clouds: &CloudOptions) -> Self {
        Self::new(clouds.inner_layer, clouds.outer_layer)
    }

    /// The four layer heights in draw order.
    #[must_use]
    pub fn heights(&self) -> [f32; 4] {
        self.heights
    }
}

impl Default for CloudLayers {
    fn default() -> Self {
        Self::from_options(&CloudOptions::default())
    }
}
