//! Converts raw key events into engine commands.
//!
//! The `InputProcessor` owns the set of currently held keys and the
//! key-binding map. It is the only thing that sits between raw window
//! events and [`SceneComposer::execute`](crate::engine::SceneComposer::execute).

use std::collections::HashSet;

use super::event::InputEvent;
use super::keyboard::KeyAction;
use crate::engine::command::{FlightCommand, ViewpointId};
use crate::options::KeybindingOptions;

impl KeyAction {
    /// Convert a discrete (non-steering) action to its command.
    fn to_command(self) -> Option<FlightCommand> {
        match self {
            Self::StopMomentum => Some(FlightCommand::StopMomentum),
            Self::TogglePause => Some(FlightCommand::TogglePause),
            Self::Reset => Some(FlightCommand::Reset),
            Self::ViewpointA => Some(FlightCommand::Viewpoint(ViewpointId::A)),
            Self::ViewpointB => Some(FlightCommand::Viewpoint(ViewpointId::B)),
            Self::ViewpointC => Some(FlightCommand::Viewpoint(ViewpointId::C)),
            Self::Help => Some(FlightCommand::ShowHelp),
            Self::Quit => Some(FlightCommand::Quit),
            Self::Accelerate
            | Self::Decelerate
            | Self::TurnLeft
            | Self::TurnRight
            | Self::Ascend
            | Self::Descend => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw key events into [`FlightCommand`]s.
///
/// Steering keys produce a [`FlightCommand::Steer`] on press and the
/// opposite delta on release. Auto-repeat presses of a key that is already
/// held, and releases of keys that were never seen pressed, are dropped so
/// the control signals always return to zero once every key is up.
///
/// # Usage
///
/// ```ignore
/// for cmd in input_processor.handle_event(&event) {
///     if composer.execute(cmd) == LoopControl::Exit {
///         break;
///     }
/// }
/// ```
pub struct InputProcessor {
    /// Keys currently held down.
    held: HashSet<String>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            held: HashSet::new(),
            key_bindings,
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Whether `key` is currently held.
    #[must_use]
    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Process a raw input event and return the resulting commands.
    pub fn handle_event(&mut self, event: &InputEvent) -> Vec<FlightCommand> {
        match event {
            InputEvent::Key { key, pressed } => {
                self.handle_key(key, *pressed).into_iter().collect()
            }
            InputEvent::FocusLost => self.release_all(),
        }
    }

    /// Process one key transition.
    pub fn handle_key(
        &mut self,
        key: &str,
        pressed: bool,
    ) -> Option<FlightCommand> {
        if pressed {
            if !self.held.insert(key.to_owned()) {
                // auto-repeat
                return None;
            }
        } else if !self.held.remove(key) {
            return None;
        }

        let action = self.key_bindings.lookup(key)?;
        match action.steering() {
            Some((axis, delta)) => Some(FlightCommand::Steer {
                axis,
                delta: if pressed { delta } else { -delta },
            }),
            None if pressed => {
                if action == KeyAction::Reset {
                    // Reset zeroes the signals; releases of keys held
                    // across it must not drive them negative.
                    self.held.retain(|k| k == key);
                }
                action.to_command()
            }
            None => None,
        }
    }

    /// Release every held key, returning the balancing steer commands.
    pub fn release_all(&mut self) -> Vec<FlightCommand> {
        let mut held: Vec<String> = self.held.drain().collect();
        held.sort();
        held.iter()
            .filter_map(|key| {
                let (axis, delta) = self.key_bindings.lookup(key)?.steering()?;
                Some(FlightCommand::Steer {
                    axis,
                    delta: -delta,
                })
            })
            .collect()
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ControlAxis, ControlSignals};

    fn press(p: &mut InputProcessor, key: &str) -> Option<FlightCommand> {
        p.handle_key(key, true)
    }

    fn release(p: &mut InputProcessor, key: &str) -> Option<FlightCommand> {
        p.handle_key(key, false)
    }

    #[test]
    fn steering_press_and_release_balance() {
        let mut p = InputProcessor::new();
        assert_eq!(
            press(&mut p, "KeyW"),
            Some(FlightCommand::Steer {
                axis: ControlAxis::Accelerate,
                delta: 1.0
            })
        );
        assert_eq!(
            release(&mut p, "KeyW"),
            Some(FlightCommand::Steer {
                axis: ControlAxis::Accelerate,
                delta: -1.0
            })
        );
    }

    #[test]
    fn turn_and_elevation_directions() {
        let mut p = InputProcessor::new();
        assert_eq!(
            press(&mut p, "KeyA"),
            Some(FlightCommand::Steer {
                axis: ControlAxis::Rotate,
                delta: -1.0
            })
        );
        assert_eq!(
            press(&mut p, "Equal"),
            Some(FlightCommand::Steer {
                axis: ControlAxis::Elevate,
                delta: -1.0
            })
        );
        assert_eq!(
            press(&mut p, "Minus"),
            Some(FlightCommand::Steer {
                axis: ControlAxis::Elevate,
                delta: 1.0
            })
        );
    }

    #[test]
    fn repeat_presses_are_ignored() {
        let mut p = InputProcessor::new();
        assert!(press(&mut p, "KeyD").is_some());
        assert!(press(&mut p, "KeyD").is_none());
        assert!(p.is_held("KeyD"));
        assert!(release(&mut p, "KeyD").is_some());
        assert!(release(&mut p, "KeyD").is_none());
        assert!(!p.is_held("KeyD"));
    }

    #[test]
    fn discrete_actions_fire_on_press_only() {
        let mut p = InputProcessor::new();
        assert_eq!(press(&mut p, "Space"), Some(FlightCommand::TogglePause));
        assert_eq!(release(&mut p, "Space"), None);
        assert_eq!(
            press(&mut p, "KeyY"),
            Some(FlightCommand::Viewpoint(ViewpointId::C))
        );
        assert_eq!(press(&mut p, "KeyQ"), Some(FlightCommand::Quit));
    }

    #[test]
    fn unbound_keys_produce_nothing() {
        let mut p = InputProcessor::new();
        assert_eq!(press(&mut p, "KeyZ"), None);
        assert_eq!(release(&mut p, "KeyZ"), None);
    }

    #[test]
    fn focus_loss_releases_steering_keys() {
        let mut p = InputProcessor::new();
        let _ = press(&mut p, "KeyW");
        let _ = press(&mut p, "KeyD");
        let _ = press(&mut p, "KeyH");

        let cmds = p.handle_event(&InputEvent::FocusLost);
        assert_eq!(
            cmds,
            vec![
                FlightCommand::Steer {
                    axis: ControlAxis::Rotate,
                    delta: -1.0
                },
                FlightCommand::Steer {
                    axis: ControlAxis::Accelerate,
                    delta: -1.0
                },
            ]
        );
        assert!(!p.is_held("KeyW"));
    }

    #[test]
    fn reset_forgets_held_steering_keys() {
        fn apply(cmd: Option<FlightCommand>, signals: &mut ControlSignals) {
            if let Some(FlightCommand::Steer { axis, delta }) = cmd {
                signals.apply(axis, delta);
            }
        }

        let mut p = InputProcessor::new();
        let mut signals = ControlSignals::default();

        apply(press(&mut p, "KeyD"), &mut signals);
        assert_eq!(signals.get(ControlAxis::Rotate), 1.0);

        assert_eq!(press(&mut p, "KeyR"), Some(FlightCommand::Reset));
        signals.clear();
        assert!(!p.is_held("KeyD"));
        assert!(p.is_held("KeyR"));

        apply(release(&mut p, "KeyR"), &mut signals);
        apply(release(&mut p, "KeyD"), &mut signals);
        assert!(signals.is_idle(), "{signals:?}");
    }
}
