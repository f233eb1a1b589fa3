//! Applies the motion tables to the actor poses, one tick at a time.

use super::actor::{Actor, ActorPoses};

/// Steps both actors through their scripted motion.
///
/// Purely tick-driven: tick 0 restores the start poses, and every other
/// tick folds the active table entries onto the current poses and then
/// wraps the Euler angles. Replaying the same tick sequence from the same
/// poses always gives bit-identical results.
#[derive(Debug, Clone, Default)]
pub struct ActorMotionEngine {
    cycles: u64,
}

impl ActorMotionEngine {
    /// A fresh engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cycle restarts seen so far.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Advance `poses` to `tick`.
    pub fn step(&mut self, tick: u32, poses: &mut ActorPoses) {
        if tick == 0 {
            poses.reset();
            self.cycles += 1;
            log::debug!("motion cycle {} restarted", self.cycles);
            return;
        }

        for actor in Actor::ALL {
            let pose = poses.get_mut(actor);
            for track in actor.tracks() {
                track.apply(tick, pose);
            }
            pose.wrap_angles();
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::super::timeline::CYCLE_TICKS;
    use super::*;

    fn run_cycle(engine: &mut ActorMotionEngine, poses: &mut ActorPoses) {
        for tick in 0..CYCLE_TICKS {
            engine.step(tick, poses);
        }
    }

    #[test]
    fn tick_zero_resets_any_state() {
        let mut engine = ActorMotionEngine::new();
        let mut poses = ActorPoses::start();
        poses.airplane.rotation = Vec3::splat(123.0);
        poses.eagle.post = Vec3::splat(9.0);
        engine.step(0, &mut poses);
        assert_eq!(poses, ActorPoses::start());
        assert_eq!(engine.cycles(), 1);
    }

    #[test]
    fn first_tick_applies_sway() {
        let mut engine = ActorMotionEngine::new();
        let mut poses = ActorPoses::start();
        engine.step(0, &mut poses);
        engine.step(1, &mut poses);

        let expected_rz = 360.0 - 4.0_f64.to_radians().cos();
        let expected_post = -0.02 * 2.0_f64.to_radians().cos();
        assert!((f64::from(poses.airplane.rotation.z) - expected_rz).abs() < 1e-4);
        assert!((f64::from(poses.airplane.post.y) - expected_post).abs() < 1e-7);
        assert_eq!(poses.airplane.prior, Vec3::ZERO);
    }

    #[test]
    fn angles_stay_wrapped_all_cycle() {
        let mut engine = ActorMotionEngine::new();
        let mut poses = ActorPoses::start();
        for tick in 0..CYCLE_TICKS {
            engine.step(tick, &mut poses);
            for actor in Actor::ALL {
                let r = poses.get(actor).rotation;
                for angle in r.to_array() {
                    assert!((0.0..360.0).contains(&angle), "{actor:?} {tick}: {r}");
                }
            }
        }
    }

    #[test]
    fn cycles_are_identical() {
        let mut engine = ActorMotionEngine::new();
        let mut poses = ActorPoses::start();
        run_cycle(&mut engine, &mut poses);
        let first = poses;
        run_cycle(&mut engine, &mut poses);
        assert_eq!(poses, first);
        assert_eq!(engine.cycles(), 2);
    }

    #[test]
    fn replay_is_deterministic() {
        let mut a = ActorPoses::start();
        let mut b = ActorPoses::start();
        let mut ea = ActorMotionEngine::new();
        let mut eb = ActorMotionEngine::new();
        for tick in (0..CYCLE_TICKS).chain(0..300) {
            ea.step(tick, &mut a);
            eb.step(tick, &mut b);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn eagle_glides_at_base_mid_cycle() {
        let mut engine = ActorMotionEngine::new();
        let mut poses = ActorPoses::start();
        for tick in 0..=200 {
            engine.step(tick, &mut poses);
        }
        assert_eq!(poses.eagle.prior.x, -1.0);
        assert_eq!(poses.eagle.prior.z, 0.4);
        assert_eq!(poses.eagle.prior.y, 0.03);
    }

    #[test]
    fn eagle_heads_home_at_cycle_end() {
        let mut engine = ActorMotionEngine::new();
        let mut poses = ActorPoses::start();
        run_cycle(&mut engine, &mut poses);
        let step = 0.5 / 45.0;
        assert!((f64::from(poses.eagle.prior.x) - (-1.0 + 44.0 * step)).abs() < 1e-6);
        assert!((f64::from(poses.eagle.prior.z) - (0.4 - 44.0 * step)).abs() < 1e-6);
        // The nudges cancel out over their twenty ticks.
        assert!((poses.eagle.prior.y - 0.03).abs() < 1e-5);
    }
}
