use serde::Serialize;

/// Pixel rectangle for the rendered square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    /// Left edge.
    pub x: u32,
    /// Bottom edge.
    pub y: u32,
    /// Side length.
    pub size: u32,
}

impl Viewport {
    /// The largest square centred in a `width` × `height` window.
    #[must_use]
    pub fn centered_square(width: u32, height: u32) -> Self {
        let size = width.min(height);
        Self {
            x: (width - size) / 2,
            y: (height - size) / 2,
            size,
        }
    }
}
