use glam::Mat4;
use serde::Serialize;

use super::lighting::SceneLights;
use super::skybox::SkyboxQuad;
use crate::animation::{Actor, ActorPose};
use crate::camera::CameraState;

/// One actor ready to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActorDraw {
    /// Which model.
    pub actor: Actor,
    /// Pose that produced `model_view`.
    pub pose: ActorPose,
    /// Full model-view matrix, including the per-model correction.
    pub model_view: Mat4,
}

/// Everything a renderer needs to draw one frame.
///
/// Matrices are model-view; pair them with
/// [`SceneComposer::projection`](super::SceneComposer::projection).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameOutput {
    /// Frame counter after this step.
    pub frame: i64,
    /// Motion tick after this step.
    pub tick: u32,
    /// Whether the clock was paused for this step.
    pub paused: bool,
    /// Camera after this step's kinematics.
    pub camera: CameraState,
    /// Camera transform alone; the skybox is drawn with this.
    pub camera_matrix: Mat4,
    /// Camera transform with the world scale applied; lights are issued
    /// under this.
    pub world_matrix: Mat4,
    /// Skybox quads recentred on the camera.
    pub skybox: [SkyboxQuad; 6],
    /// Lights with positions re-issued for the world scale.
    pub lights: SceneLights,
    /// One model-view per cloud layer, in draw order.
    pub cloud_layers: [Mat4; 4],
    /// Airplane then eagle.
    pub actors: [ActorDraw; 2],
}
