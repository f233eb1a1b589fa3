//! Closed-form motion curves evaluated per tick.
//!
//! Curves are evaluated in `f64` and folded into the `f32` pose fields at
//! the end, so long accumulations drift the same way on every run.

/// π as the motion tables were authored with. The recorded viewpoint
/// snapshots depend on this exact value.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141_592;

/// Periodic wave shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    /// `sin`
    Sine,
    /// `cos`
    Cosine,
}

/// A deterministic function of the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionCurve {
    /// The same value every tick.
    Constant(f64),
    /// `amplitude * wave((tick + phase) * frequency°)`.
    Periodic {
        /// Sine or cosine.
        wave: Wave,
        /// Peak value.
        amplitude: f64,
        /// Degrees advanced per tick.
        frequency: f64,
        /// Tick offset applied before scaling.
        phase: f64,
    },
    /// `slope * (tick - origin)`.
    Ramp {
        /// Change per tick.
        slope: f64,
        /// Tick at which the ramp is zero.
        origin: f64,
    },
}

impl MotionCurve {
    /// Sine wave with no phase offset.
    #[must_use]
    pub const fn sine(amplitude: f64, frequency: f64) -> Self {
        Self::sine_from(amplitude, frequency, 0.0)
    }

    /// Sine wave with a tick offset.
    #[must_use]
    pub const fn sine_from(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self::Periodic {
            wave: Wave::Sine,
            amplitude,
            frequency,
            phase,
        }
    }

    /// Cosine wave with no phase offset.
    #[must_use]
    pub const fn cosine(amplitude: f64, frequency: f64) -> Self {
        Self::cosine_from(amplitude, frequency, 0.0)
    }

    /// Cosine wave with a tick offset.
    #[must_use]
    pub const fn cosine_from(
        amplitude: f64,
        frequency: f64,
        phase: f64,
    ) -> Self {
        Self::Periodic {
            wave: Wave::Cosine,
            amplitude,
            frequency,
            phase,
        }
    }

    /// Linear ramp through zero at `origin`.
    #[must_use]
    pub const fn ramp(slope: f64, origin: f64) -> Self {
        Self::Ramp { slope, origin }
    }

    /// Evaluate at `tick`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, tick: u32) -> f64 {
        let t = f64::from(tick);
        match *self {
            Self::Constant(value) => value,
            Self::Periodic {
                wave,
                amplitude,
                frequency,
                phase,
            } => {
                let radians = (t + phase) * frequency * PI / 180.0;
                let value = match wave {
                    Wave::Sine => radians.sin(),
                    Wave::Cosine => radians.cos(),
                };
                amplitude * value
            }
            Self::Ramp { slope, origin } => slope * (t - origin),
        }
    }
}

/// How a curve value lands in its pose field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionOp {
    /// Accumulate onto the current value.
    Add,
    /// Overwrite the current value.
    Set,
}

impl MotionOp {
    /// Fold `value` into `field`.
    #[inline]
    pub fn apply(self, field: &mut f32, value: f64) {
        *field = match self {
            Self::Add => (f64::from(*field) + value) as f32,
            Self::Set => value as f32,
        };
    }
}
