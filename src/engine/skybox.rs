//! Camera-centred skybox cube.

use glam::{Vec2, Vec3};
use serde::Serialize;

use crate::clouds::{TextureFilter, TextureRequest, TextureWrap};

/// Unit-cube corners: bit 2 selects +X, bit 1 +Y, bit 0 +Z.
pub const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
];

/// Texture coordinates shared by every face, in corner order.
pub const FACE_UV: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// One side of the skybox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkyFace {
    /// -X
    West,
    /// +X
    East,
    /// -Y
    Below,
    /// +Y
    Above,
    /// +Z
    South,
    /// -Z
    North,
}

impl SkyFace {
    /// Faces in draw order.
    pub const ALL: [Self; 6] = [
        Self::West,
        Self::East,
        Self::Below,
        Self::Above,
        Self::South,
        Self::North,
    ];

    /// Indices into [`CUBE_CORNERS`], wound to match [`FACE_UV`].
    #[must_use]
    pub const fn corners(self) -> [usize; 4] {
        match self {
            Self::West => [1, 0, 2, 3],
            Self::East => [4, 5, 7, 6],
            Self::Below => [4, 0, 1, 5],
            Self::Above => [7, 3, 2, 6],
            Self::South => [5, 1, 3, 7],
            Self::North => [0, 4, 6, 2],
        }
    }

    /// Image file for this face.
    #[must_use]
    pub const fn texture_path(self) -> &'static str {
        match self {
            Self::West => "resources/textures/skybox/west.jpeg",
            Self::East => "resources/textures/skybox/east.jpeg",
            Self::Below => "resources/textures/skybox/bottom.jpeg",
            Self::Above => "resources/textures/skybox/top.jpeg",
            Self::South => "resources/textures/skybox/south.jpeg",
            Self::North => "resources/textures/skybox/north.jpeg",
        }
    }

    /// Texture request: nearest filtering, clamped edges.
    #[must_use]
    pub fn texture(self) -> TextureRequest {
        TextureRequest {
            path: self.texture_path().to_owned(),
            wrap: TextureWrap::Clamp,
            filter: TextureFilter::Nearest,
        }
    }
}

/// One recentred skybox quad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkyboxQuad {
    /// Which face.
    pub face: SkyFace,
    /// Corner positions, wound to match [`FACE_UV`].
    pub corners: [Vec3; 4],
}

/// The six faces with every corner shifted by `-camera_position`, so the
/// cube stays centred on the viewer after the camera translation.
#[must_use]
pub fn skybox_quads(camera_position: Vec3) -> [SkyboxQuad; 6] {
    SkyFace::ALL.map(|face| SkyboxQuad {
        face,
        corners: face.corners().map(|i| CUBE_CORNERS[i] - camera_position),
    })
}
