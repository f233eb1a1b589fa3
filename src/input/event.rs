/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`FlightCommand`](crate::engine::FlightCommand)
/// values.
///
/// # Example
///
/// ```ignore
/// for cmd in input_processor.handle_event(&InputEvent::Key {
///     key: "KeyW".into(),
///     pressed: true,
/// }) {
///     composer.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Physical key pressed or released.
    Key {
        /// Key string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"Space"`, `"Equal"`, ...).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The window lost keyboard focus; any held keys will never report a
    /// release.
    FocusLost,
}
