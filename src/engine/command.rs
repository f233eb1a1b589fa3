//! The composer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it came from a key press, a script,
//! or a programmatic call, is a [`FlightCommand`]. Consumers construct
//! commands and pass them to
//! [`SceneComposer::execute`](super::SceneComposer::execute).

use serde::{Deserialize, Serialize};

use crate::input::ControlAxis;

/// One of the three scripted viewpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewpointId {
    /// Late in the loop, looking back at both actors.
    A,
    /// Cycle start, close behind the actors.
    B,
    /// Mid roll, from the side.
    C,
}

/// A discrete or parameterized operation the composer can perform.
///
/// ```ignore
/// composer.execute(FlightCommand::TogglePause);
/// composer.execute(FlightCommand::Steer { axis: ControlAxis::Rotate, delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Add `delta` to one steering accumulator.
    Steer {
        /// Which accumulator.
        axis: ControlAxis,
        /// Signed change, +1 or -1 for a key press or release.
        delta: f32,
    },

    /// Drop forward momentum to zero.
    StopMomentum,

    // ── Playback ────────────────────────────────────────────────────
    /// Pause or resume the actor animation and camera momentum.
    TogglePause,

    /// Restore the startup camera, clock, and actor poses.
    Reset,

    /// Jump to a scripted viewpoint (pauses).
    Viewpoint(ViewpointId),

    // ── Application ─────────────────────────────────────────────────
    /// Produce the controls text.
    ShowHelp,

    /// Ask the host loop to exit.
    Quit,
}

/// What the host loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopControl {
    /// Keep running.
    Continue,
    /// Keep running and show this text to the user.
    Help(String),
    /// Stop the loop.
    Exit,
}
