//! Input handling: key actions, directional control signals, and the
//! input processor that converts raw key events into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Converts raw events into engine commands.
pub mod processor;
/// Directional control accumulators.
pub mod signals;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
pub use signals::{ControlAxis, ControlSignals};
