use serde::{Deserialize, Serialize};

/// One of the three independently accumulated steering inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlAxis {
    /// Heading change.
    Rotate,
    /// Vertical movement.
    Elevate,
    /// Momentum change.
    Accelerate,
}

/// Directional accumulators written by the input side and read (never
/// owned) by the camera controller.
///
/// Each held key contributes ±1 to its axis, so holding two opposing keys
/// cancels to zero and holding two same-direction bindings doubles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlSignals {
    /// Net turn input (negative = left).
    pub rotate: f32,
    /// Net vertical input.
    pub elevate: f32,
    /// Net momentum input (negative = decelerate).
    pub accelerate: f32,
}

impl ControlSignals {
    /// Add `delta` to the accumulator for `axis`.
    pub fn apply(&mut self, axis: ControlAxis, delta: f32) {
        *self.axis_mut(axis) += delta;
    }

    /// Current value of the accumulator for `axis`.
    #[must_use]
    pub fn get(&self, axis: ControlAxis) -> f32 {
        match axis {
            ControlAxis::Rotate => self.rotate,
            ControlAxis::Elevate => self.elevate,
            ControlAxis::Accelerate => self.accelerate,
        }
    }

    /// Zero every accumulator.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether every accumulator is zero.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.rotate == 0.0 && self.elevate == 0.0 && self.accelerate == 0.0
    }

    fn axis_mut(&mut self, axis: ControlAxis) -> &mut f32 {
        match axis {
            ControlAxis::Rotate => &mut self.rotate,
            ControlAxis::Elevate => &mut self.elevate,
            ControlAxis::Accelerate => &mut self.accelerate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_keys_cancel() {
        let mut signals = ControlSignals::default();
        signals.apply(ControlAxis::Rotate, 1.0);
        signals.apply(ControlAxis::Rotate, -1.0);
        assert_eq!(signals.rotate, 0.0);
        assert!(signals.is_idle());
    }

    #[test]
    fn axes_are_independent() {
        let mut signals = ControlSignals::default();
        signals.apply(ControlAxis::Accelerate, 1.0);
        signals.apply(ControlAxis::Accelerate, 1.0);
        signals.apply(ControlAxis::Elevate, -1.0);
        assert_eq!(signals.get(ControlAxis::Accelerate), 2.0);
        assert_eq!(signals.get(ControlAxis::Elevate), -1.0);
        assert_eq!(signals.get(ControlAxis::Rotate), 0.0);

        signals.clear();
        assert!(signals.is_idle());
    }
}
