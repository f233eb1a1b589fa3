use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Diagnostic toggles.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Log camera, tick, and actor poses every frame at trace level.
    #[schemars(title = "Trace Frames")]
    pub trace_frames: bool,
}
