use web_time::{Duration, Instant};

/// Fixed-rate frame pacing with a smoothed FPS estimate.
///
/// The animation is authored per frame, so the host loop must hold the
/// nominal rate: [`time_until_next`](Self::time_until_next) says how long
/// to sleep before producing the next frame.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    frame_duration: Duration,
    /// When the previous frame ended
    last_frame: Instant,
    /// Frames completed so far
    frames: u64,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            frame_duration,
            last_frame: Instant::now(),
            frames: 0,
            smoothed_fps: target_fps.max(1) as f32,
            smoothing: 0.05,
        }
    }

    /// Nominal duration of one frame (zero when unlimited).
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Whether enough time has passed since the last frame to produce
    /// another one.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.target_fps == 0 || self.last_frame.elapsed() >= self.frame_duration
    }

    /// Remaining wait before the next frame is due.
    #[must_use]
    pub fn time_until_next(&self) -> Duration {
        self.frame_duration.saturating_sub(self.last_frame.elapsed())
    }

    /// Call after producing a frame to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frames += 1;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Frames completed so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
