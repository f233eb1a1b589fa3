use serde::{Deserialize, Serialize};

use super::signals::ControlAxis;

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// accelerate = "KeyW"
/// toggle_pause = "Space"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Gain forward momentum while held.
    Accelerate,
    /// Lose forward momentum while held.
    Decelerate,
    /// Turn the heading left while held.
    TurnLeft,
    /// Turn the heading right while held.
    TurnRight,
    /// Climb while held.
    Ascend,
    /// Sink while held.
    Descend,
    /// Drop momentum to zero.
    StopMomentum,
    /// Pause or resume the animation clock.
    TogglePause,
    /// Restore the startup camera, clock, and actor poses.
    Reset,
    /// Jump to scripted viewpoint A.
    ViewpointA,
    /// Jump to scripted viewpoint B.
    ViewpointB,
    /// Jump to scripted viewpoint C.
    ViewpointC,
    /// Show the controls summary.
    Help,
    /// Leave the animation loop.
    Quit,
}

impl KeyAction {
    /// For held (steering) actions, the control axis and the signal delta a
    /// key press contributes. The matching release contributes the negation.
    ///
    /// Elevation deltas are inverted because the world is translated by the
    /// camera position rather than the camera being moved.
    #[must_use]
    pub fn steering(self) -> Option<(ControlAxis, f32)> {
        match self {
            Self::Accelerate => Some((ControlAxis::Accelerate, 1.0)),
            Self::Decelerate => Some((ControlAxis::Accelerate, -1.0)),
            Self::TurnLeft => Some((ControlAxis::Rotate, -1.0)),
            Self::TurnRight => Some((ControlAxis::Rotate, 1.0)),
            Self::Ascend => Some((ControlAxis::Elevate, -1.0)),
            Self::Descend => Some((ControlAxis::Elevate, 1.0)),
            _ => None,
        }
    }

    /// Short human-readable label used in the controls summary.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Accelerate => "Accelerate",
            Self::Decelerate => "Decelerate",
            Self::TurnLeft => "Turn left",
            Self::TurnRight => "Turn right",
            Self::Ascend => "Increase elevation",
            Self::Descend => "Decrease elevation",
            Self::StopMomentum => "Stop moving",
            Self::TogglePause => "Pause animation",
            Self::Reset => "Reset",
            Self::ViewpointA => "Set viewpoint A",
            Self::ViewpointB => "Set viewpoint B",
            Self::ViewpointC => "Set viewpoint C",
            Self::Help => "Help",
            Self::Quit => "Quit",
        }
    }

    /// Every action, in controls-summary order.
    pub const ALL: [Self; 14] = [
        Self::Accelerate,
        Self::Decelerate,
        Self::TurnLeft,
        Self::TurnRight,
        Self::Ascend,
        Self::Descend,
        Self::StopMomentum,
        Self::TogglePause,
        Self::ViewpointA,
        Self::ViewpointB,
        Self::ViewpointC,
        Self::Help,
        Self::Reset,
        Self::Quit,
    ];
}
