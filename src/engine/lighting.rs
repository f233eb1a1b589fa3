use glam::{Vec3, Vec4};
use serde::Serialize;

use crate::options::LightingOptions;

/// A positional light in fixed-function terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightSource {
    /// Homogeneous position (`w = 1`).
    pub position: Vec4,
    /// Ambient contribution.
    pub ambient: Vec4,
    /// Diffuse contribution.
    pub diffuse: Vec4,
    /// Specular contribution.
    pub specular: Vec4,
}

impl LightSource {
    fn new(direction: Vec3, diffuse: f32, specular: f32) -> Self {
        Self {
            position: direction.extend(1.0),
            ambient: Vec4::W,
            diffuse: Vec3::splat(diffuse).extend(1.0),
            specular: Vec3::splat(specular).extend(1.0),
        }
    }

    /// Same light with its position pushed out to `direction / world_scale`,
    /// so it lands on the skybox after the world-scale transform.
    #[must_use]
    pub fn scaled_to_world(&self, world_scale: f32) -> Self {
        Self {
            position: (self.position.truncate() / world_scale).extend(1.0),
            ..*self
        }
    }
}

/// The sun and its reflection off the cloud layer, plus global ambience.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SceneLights {
    /// Global ambient light.
    pub ambient: Vec4,
    /// Primary light at the sun.
    pub sun: LightSource,
    /// Dimmer light mirrored below the horizon.
    pub reflection: LightSource,
}

impl SceneLights {
    /// Lights at their configured (unscaled) directions.
    #[must_use]
    pub fn from_options(lighting: &LightingOptions) -> Self {
        let ratio = lighting.reflection_ratio;
        Self {
            ambient: Vec3::from_array(lighting.ambient).extend(1.0),
            sun: LightSource::new(
                Vec3::from_array(lighting.sun_position),
                lighting.sun_diffuse,
                lighting.sun_specular,
            ),
            reflection: LightSource::new(
                Vec3::from_array(lighting.reflection_position),
                lighting.sun_diffuse * ratio,
                lighting.sun_specular * ratio,
            ),
        }
    }

    /// Positions re-issued for the current frame's world scale.
    #[must_use]
    pub fn scaled_to_world(&self, world_scale: f32) -> Self {
        Self {
            ambient: self.ambient,
            sun: self.sun.scaled_to_world(world_scale),
            reflection: self.reflection.scaled_to_world(world_scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflection_is_half_as_bright() {
        let lights = SceneLights::from_options(&LightingOptions::default());
        assert_eq!(lights.sun.position, Vec4::new(-1.0, 1.0, -1.0, 1.0));
        assert_eq!(lights.reflection.position, Vec4::new(-1.0, -1.0, -1.0, 1.0));
        assert_eq!(lights.sun.diffuse, Vec4::new(0.5, 0.5, 0.5, 1.0));
        assert_eq!(lights.reflection.diffuse, Vec4::new(0.25, 0.25, 0.25, 1.0));
        assert_eq!(lights.reflection.specular, Vec4::new(0.35, 0.35, 0.35, 1.0));
        assert_eq!(lights.sun.ambient, Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn scaling_is_not_cumulative() {
        let lights = SceneLights::from_options(&LightingOptions::default());
        let once = lights.scaled_to_world(0.5);
        assert_eq!(once.sun.position, Vec4::new(-2.0, 2.0, -2.0, 1.0));
        assert_eq!(lights.scaled_to_world(0.5), once);
        assert_eq!(once.sun.diffuse, lights.sun.diffuse);
    }
}
