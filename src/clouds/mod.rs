//! Procedural cloud field: a tiled grid of seven-disk clusters generated
//! once at startup, plus the per-frame placement that keeps it around the
//! camera without regenerating it.

/// One-shot vertex synthesis for the tiled cluster grid.
pub mod field;
/// Per-frame follow offset and layer heights.
pub mod placement;

pub use field::{
    cluster_layout, CloudField, CloudFieldParams, CloudVertex, DiskShape,
    TextureFilter, TextureRequest, TextureWrap, DISKS_PER_CLUSTER,
};
pub use placement::{follow_offset, CloudLayers};
