//! Camera system for the fly-through.
//!
//! The camera never moves as a node: the world is rotated by the heading
//! and translated by the camera position, so a single global transform
//! stack serves every renderer collaborator.

/// Momentum/heading/elevation integrator driven by control signals.
pub mod controller;
/// Camera state, view transform, and projection.
pub mod core;

pub use self::controller::{CameraController, CameraRates};
pub use self::core::{CameraState, Projection};
