use glam::Mat4;

/// A stack of 4×4 matrices with an always-present top.
///
/// Mirrors the fixed-function model-view stack, but as a plain value owned
/// by the caller: nothing leaks into a global graphics context, and the
/// composed top can be handed to a renderer as a flat matrix.
///
/// ```
/// use flythrough::transform::{translate, MatrixStack};
///
/// let mut stack = MatrixStack::new();
/// stack.push();
/// stack.multiply(translate(1.0, 0.0, 0.0));
/// let placed = stack.top();
/// stack.pop();
/// assert_eq!(stack.top(), glam::Mat4::IDENTITY);
/// assert_ne!(placed, glam::Mat4::IDENTITY);
/// ```
#[derive(Debug, Clone)]
pub struct MatrixStack {
    /// Saved frames below the active top.
    saved: Vec<Mat4>,
    /// The active transform.
    current: Mat4,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    /// Create a stack whose top is the identity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            saved: Vec::with_capacity(8),
            current: Mat4::IDENTITY,
        }
    }

    /// Replace the active top with the identity. Saved frames are kept.
    pub fn load_identity(&mut self) {
        self.current = Mat4::IDENTITY;
    }

    /// Drop every saved frame and reset the top to identity.
    pub fn clear(&mut self) {
        self.saved.clear();
        self.current = Mat4::IDENTITY;
    }

    /// Compose `m` onto the top: `current = current * m`.
    pub fn multiply(&mut self, m: Mat4) {
        self.current *= m;
    }

    /// Save a copy of the active top.
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the most recently saved top.
    ///
    /// Popping an empty stack resets the top to identity and logs a
    /// warning; an unbalanced pop is a caller bug, never a fault.
    pub fn pop(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.current = previous;
        } else {
            log::warn!("matrix stack underflow; resetting to identity");
            self.current = Mat4::IDENTITY;
        }
    }

    /// Run `f` inside a push/pop pair and return its result.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push();
        let result = f(self);
        self.pop();
        result
    }

    /// The active transform.
    #[must_use]
    pub fn top(&self) -> Mat4 {
        self.current
    }

    /// Number of saved frames below the top.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::transform::{rotate_y, scale, translate};

    const EPSILON: f32 = 1e-5;

    #[test]
    fn later_transforms_apply_closer_to_object() {
        let mut stack = MatrixStack::new();
        stack.multiply(translate(10.0, 0.0, 0.0));
        stack.multiply(scale(2.0, 2.0, 2.0));

        // Scale first (local), then translate.
        let p = stack.top().transform_point3(Vec3::X);
        assert!((p - Vec3::new(12.0, 0.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn push_pop_isolates_siblings() {
        let mut stack = MatrixStack::new();
        stack.multiply(rotate_y(30.0));
        let base = stack.top();

        stack.push();
        stack.multiply(translate(1.0, 2.0, 3.0));
        assert_eq!(stack.depth(), 1);
        stack.pop();

        assert_eq!(stack.top(), base);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn scoped_restores_top() {
        let mut stack = MatrixStack::new();
        let inner = stack.scoped(|s| {
            s.multiply(translate(0.0, 5.0, 0.0));
            s.top()
        });
        assert_eq!(stack.top(), Mat4::IDENTITY);
        assert_eq!(inner, translate(0.0, 5.0, 0.0));
    }

    #[test]
    fn underflow_resets_to_identity() {
        let mut stack = MatrixStack::new();
        stack.multiply(translate(1.0, 1.0, 1.0));
        stack.pop();
        assert_eq!(stack.top(), Mat4::IDENTITY);
    }

    #[test]
    fn load_identity_keeps_saved_frames() {
        let mut stack = MatrixStack::new();
        stack.multiply(translate(1.0, 0.0, 0.0));
        stack.push();
        stack.load_identity();
        assert_eq!(stack.top(), Mat4::IDENTITY);
        stack.pop();
        assert_eq!(stack.top(), translate(1.0, 0.0, 0.0));

        stack.push();
        stack.clear();
        assert_eq!(stack.depth(), 0);
    }
}
