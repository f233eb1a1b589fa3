//! Homogeneous transform primitives and the matrix-stack composition
//! discipline used to place the camera, clouds, and actors.
//!
//! Every builder returns a column-major [`glam::Mat4`]. Composition always
//! happens by post-multiplying onto the active stack top
//! (`current = current * M`), so transforms issued later in a sequence act
//! closer to the object in its local space.

/// Matrix builders: translate, scale, axis rotations, perspective.
pub mod matrix;
/// Value-semantics matrix stack with scoped push/pop.
pub mod stack;

pub use matrix::{
    perspective, rotate_x, rotate_y, rotate_z, scale, translate, wrap_degrees,
};
pub use stack::MatrixStack;
