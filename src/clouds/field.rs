use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::options::CloudOptions;

/// Disks in one cloud cluster: one central disk plus six satellites.
pub const DISKS_PER_CLUSTER: usize = 7;

/// Scale of the central disk.
const CENTER_SCALE: f32 = 0.125;
/// Scale of each satellite disk.
const SATELLITE_SCALE: f32 = 0.0625;
/// Distance of each satellite centre from the cluster centre.
const SATELLITE_RADIUS: f32 = 0.125;
/// Satellite directions in degrees, in generation order. Not a uniform
/// 60° sweep: the 0°/180° pair comes first.
const SATELLITE_ANGLES: [f32; 6] = [0.0, 180.0, 60.0, 120.0, 240.0, 300.0];

/// Scale and XZ offset of one disk within a cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskShape {
    /// Uniform XZ scale applied to the unit circle.
    pub scale: f32,
    /// Centre of the disk on the XZ plane.
    pub offset: Vec2,
}

/// The seven disks of a cluster, central disk first.
#[must_use]
pub fn cluster_layout() -> [DiskShape; DISKS_PER_CLUSTER] {
    let mut layout = [DiskShape {
        scale: CENTER_SCALE,
        offset: Vec2::ZERO,
    }; DISKS_PER_CLUSTER];

    for (disk, angle) in layout[1..].iter_mut().zip(SATELLITE_ANGLES) {
        let (s, c) = angle.to_radians().sin_cos();
        // The on-axis pair sits exactly on the X axis.
        let direction = if angle % 180.0 == 0.0 {
            Vec2::new(c.round(), 0.0)
        } else {
            Vec2::new(c, s)
        };
        *disk = DiskShape {
            scale: SATELLITE_SCALE,
            offset: direction * SATELLITE_RADIUS,
        };
    }
    layout
}

/// A single cloud vertex, laid out for direct upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CloudVertex {
    /// Position in unscaled world units (y is always 0 before layering).
    pub position: [f32; 3],
}

/// Texture wrap policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureWrap {
    /// Tile the texture.
    Repeat,
    /// Clamp to the edge texels.
    Clamp,
}

/// Texture filter policy (both minification and magnification).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    /// Nearest texel.
    Nearest,
    /// Bilinear.
    Linear,
}

/// A texture the renderer collaborator must load and bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureRequest {
    /// Image path relative to the working directory.
    pub path: String,
    /// Wrap policy on both axes.
    pub wrap: TextureWrap,
    /// Filter policy.
    pub filter: TextureFilter,
}

/// Grid and tessellation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudFieldParams {
    /// Tiles along X.
    pub tiles_x: usize,
    /// Tiles along Z.
    pub tiles_z: usize,
    /// Polygon sections per disk.
    pub sections: usize,
}

impl CloudFieldParams {
    /// Read the grid parameters from the cloud options.
    #[must_use]
    pub fn from_options(clouds: &CloudOptions) -> Self {
        Self {
            tiles_x: clouds.tiles_x as usize,
            tiles_z: clouds.tiles_z as usize,
            sections: clouds.sections as usize,
        }
    }

    /// Number of disks in the whole field.
    #[must_use]
    pub fn disk_count(&self) -> usize {
        self.tiles_x * self.tiles_z * DISKS_PER_CLUSTER
    }

    /// Number of vertices in the whole field.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.disk_count() * self.sections
    }
}

/// The generated field: a flat vertex buffer indexed as
/// `[tile_x][tile_z][disk][section]`, plus the texture every disk uses.
///
/// Each disk is one convex polygon of `sections` consecutive vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudField {
    params: CloudFieldParams,
    vertices: Vec<CloudVertex>,
    texture: TextureRequest,
}

impl CloudField {
    /// Synthesize the field. Pure: the same inputs give a bit-identical
    /// buffer.
    #[must_use]
    pub fn generate(params: CloudFieldParams, texture_path: &str) -> Self {
        let sections = params.sections;
        let increment = std::f32::consts::TAU / sections as f32;

        let circle: Vec<Vec2> = (0..sections)
            .map(|i| {
                let (s, c) = (i as f32 * increment).sin_cos();
                Vec2::new(c, s)
            })
            .collect();

        let cluster: Vec<Vec2> = cluster_layout()
            .iter()
            .flat_map(|disk| {
                circle.iter().map(move |p| *p * disk.scale + disk.offset)
            })
            .collect();

        let half_x = (params.tiles_x / 2) as f32;
        let half_z = (params.tiles_z / 2) as f32;

        let mut vertices = Vec::with_capacity(params.vertex_count());
        for i in 0..params.tiles_x {
            for j in 0..params.tiles_z {
                vertices.extend(cluster.iter().map(|p| CloudVertex {
                    position: [
                        p.x - half_x + i as f32,
                        0.0,
                        p.y - half_z + j as f32,
                    ],
                }));
            }
        }

        log::debug!(
            "generated cloud field: {}x{} tiles, {} sections, {} vertices",
            params.tiles_x,
            params.tiles_z,
            sections,
            vertices.len()
        );

        Self {
            params,
            vertices,
            texture: TextureRequest {
                path: texture_path.to_owned(),
                wrap: TextureWrap::Repeat,
                filter: TextureFilter::Linear,
            },
        }
    }

    /// Generate from the cloud options.
    #[must_use]
    pub fn from_options(clouds: &CloudOptions) -> Self {
        Self::generate(CloudFieldParams::from_options(clouds), &clouds.texture)
    }

    /// Parameters the field was generated from.
    #[must_use]
    pub fn params(&self) -> CloudFieldParams {
        self.params
    }

    /// The flat vertex buffer.
    #[must_use]
    pub fn vertices(&self) -> &[CloudVertex] {
        &self.vertices
    }

    /// The vertex buffer as raw bytes for upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Total vertex count.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The single texture shared by every disk.
    #[must_use]
    pub fn texture(&self) -> &TextureRequest {
        &self.texture
    }

    /// Vertex at `[tile_x][tile_z][disk][section]`, if in range.
    #[must_use]
    pub fn vertex(
        &self,
        tile_x: usize,
        tile_z: usize,
        disk: usize,
        section: usize,
    ) -> Option<CloudVertex> {
        let p = self.params;
        if tile_x >= p.tiles_x
            || tile_z >= p.tiles_z
            || disk >= DISKS_PER_CLUSTER
            || section >= p.sections
        {
            return None;
        }
        let index = ((tile_x * p.tiles_z + tile_z) * DISKS_PER_CLUSTER + disk)
            * p.sections
            + section;
        self.vertices.get(index).copied()
    }

    /// Vertex ranges of each disk polygon, in buffer order.
    pub fn polygons(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        let sections = self.params.sections;
        (0..self.params.disk_count()).map(move |d| d * sections..(d + 1) * sections)
    }
}
