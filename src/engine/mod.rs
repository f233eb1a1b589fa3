//! Per-frame scene composition and the command surface.
//!
//! [`SceneComposer`] owns every piece of mutable animation state: camera,
//! control signals, frame clock, actor poses, and the cloud field. Each
//! call to [`SceneComposer::step`] advances one frame and returns a
//! [`FrameOutput`] that a renderer can draw without further math.

/// Command vocabulary.
pub mod command;
/// Frame hand-off types.
pub mod frame;
/// Sun and reflection lights.
pub mod lighting;
/// Camera-centred skybox.
pub mod skybox;
/// Mutable scene state.
pub mod state;
/// Scripted viewpoints.
pub mod viewpoint;
/// Square viewport helper.
pub mod viewport;

use glam::Mat4;

pub use self::command::{FlightCommand, LoopControl, ViewpointId};
pub use self::frame::{ActorDraw, FrameOutput};
pub use self::lighting::{LightSource, SceneLights};
pub use self::skybox::{skybox_quads, SkyFace, SkyboxQuad};
pub use self::state::SceneState;
pub use self::viewpoint::Viewpoint;
pub use self::viewport::Viewport;
use crate::animation::{Actor, ActorMotionEngine, ActorPoses, AnimationClock};
use crate::camera::{CameraController, CameraState, Projection};
use crate::clouds::{follow_offset, CloudField, CloudLayers};
use crate::input::{ControlSignals, KeyAction};
use crate::options::Options;
use crate::transform::{rotate_y, scale, translate, MatrixStack};

/// Drives one fly-through: camera kinematics, scripted actor motion, and
/// the transform hierarchy that ties them to the cloud field and skybox.
///
/// Mutable state lives in a single [`SceneState`]; everything else is
/// derived from the options once at construction.
///
/// ```
/// use flythrough::engine::SceneComposer;
/// use flythrough::options::Options;
///
/// let mut composer = SceneComposer::new(Options::default());
/// let frame = composer.step();
/// assert_eq!(frame.frame, 0);
/// assert_eq!(frame.tick, 0);
/// ```
pub struct SceneComposer {
    options: Options,
    state: SceneState,
    controller: CameraController,
    projection: Projection,
    motion: ActorMotionEngine,
    clouds: CloudField,
    cloud_layers: CloudLayers,
    lights: SceneLights,
    stack: MatrixStack,
}

impl SceneComposer {
    /// Build the startup scene. Generates the cloud field once.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let controller =
            CameraController::from_options(&options.camera, &options.scene);
        let projection =
            Projection::from_options(&options.camera, &options.scene);
        let clouds = CloudField::from_options(&options.clouds);
        let cloud_layers = CloudLayers::from_options(&options.clouds);
        let lights = SceneLights::from_options(&options.lighting);

        log::info!(
            "scene ready: {} fps, world scale {}, {} cloud vertices",
            options.scene.fps,
            options.scene.world_scale,
            clouds.vertex_count()
        );

        Self {
            state: SceneState::startup(&options),
            controller,
            projection,
            motion: ActorMotionEngine::new(),
            clouds,
            cloud_layers,
            lights,
            stack: MatrixStack::new(),
            options,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Options the scene was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The whole mutable state.
    #[must_use]
    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.state.camera
    }

    /// Current steering accumulators.
    #[must_use]
    pub fn signals(&self) -> &ControlSignals {
        &self.state.signals
    }

    /// Frame clock.
    #[must_use]
    pub fn clock(&self) -> &AnimationClock {
        &self.state.clock
    }

    /// Current actor poses.
    #[must_use]
    pub fn poses(&self) -> &ActorPoses {
        &self.state.poses
    }

    /// The generated cloud field.
    #[must_use]
    pub fn clouds(&self) -> &CloudField {
        &self.clouds
    }

    /// Projection for every matrix in a [`FrameOutput`].
    #[must_use]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    // ── Frame ───────────────────────────────────────────────────────

    /// Advance one frame and compose every transform for it.
    pub fn step(&mut self) -> FrameOutput {
        let world_scale = self.options.scene.world_scale;
        let state = &mut self.state;

        self.stack.clear();
        self.controller.step(&mut state.camera, &state.signals);
        self.stack.multiply(state.camera.view_matrix());
        let camera_matrix = self.stack.top();
        let skybox = skybox_quads(state.camera.position);

        self.stack.multiply(scale(world_scale, world_scale, world_scale));
        let world_matrix = self.stack.top();
        let lights = self.lights.scaled_to_world(world_scale);

        let follow = follow_offset(state.camera.position, world_scale);
        let heights = self.cloud_layers.heights();
        let cloud_layers = self.stack.scoped(|stack| {
            stack.multiply(translate(follow.x, follow.y, follow.z));
            heights.map(|h| {
                stack.scoped(|stack| {
                    stack.multiply(translate(0.0, h, 0.0));
                    stack.top()
                })
            })
        });

        if state.clock.advance() {
            if state.clock.wrapped() {
                log::debug!("frame {}: cycle wrapped", state.clock.frame());
            }
            self.motion.step(state.clock.tick(), &mut state.poses);
        }

        let scene = self.scene_transform();
        let poses = self.state.poses;
        let actors = self.stack.scoped(|stack| {
            stack.multiply(scene);
            Actor::ALL.map(|actor| {
                let pose = *poses.get(actor);
                stack.scoped(|stack| {
                    stack.multiply(pose.local_matrix());
                    stack.multiply(actor.model_correction());
                    ActorDraw {
                        actor,
                        pose,
                        model_view: stack.top(),
                    }
                })
            })
        });

        let state = &self.state;
        let output = FrameOutput {
            frame: state.clock.frame(),
            tick: state.clock.tick(),
            paused: state.clock.is_paused(),
            camera: state.camera,
            camera_matrix,
            world_matrix,
            skybox,
            lights,
            cloud_layers,
            actors,
        };

        if self.options.debug.trace_frames {
            log::trace!(
                "frame {} tick {}: camera {:?} heading {:.3} momentum {:.6}",
                output.frame,
                output.tick,
                state.camera.position,
                state.camera.heading,
                state.camera.momentum
            );
            for draw in &output.actors {
                log::trace!("  {}: {:?}", draw.actor.label(), draw.pose);
            }
        }

        output
    }

    /// Fixed scene rotation plus the dolly that carries the actors
    /// forward with the frame counter.
    fn scene_transform(&self) -> Mat4 {
        let scene = &self.options.scene;
        let depth = -f64::from(scene.dolly_per_frame)
            * self.state.clock.frame() as f64
            * f64::from(scene.world_scale);
        rotate_y(scene.scene_rotation) * translate(0.0, 0.0, depth as f32)
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Apply one command.
    pub fn execute(&mut self, command: FlightCommand) -> LoopControl {
        match command {
            FlightCommand::Steer { axis, delta } => {
                self.state.signals.apply(axis, delta);
            }
            FlightCommand::StopMomentum => {
                log::info!("momentum stopped");
                self.state.camera.momentum = 0.0;
            }
            FlightCommand::TogglePause => {
                let paused = self.toggle_pause();
                log::info!("{}", if paused { "paused" } else { "resumed" });
            }
            FlightCommand::Reset => self.reset(),
            FlightCommand::Viewpoint(id) => self.apply_viewpoint(id),
            FlightCommand::ShowHelp => return LoopControl::Help(self.help_text()),
            FlightCommand::Quit => {
                log::info!("quit requested");
                return LoopControl::Exit;
            }
        }
        LoopControl::Continue
    }

    /// Pause or resume. Pausing parks the camera momentum; resuming
    /// restores it. Returns the new pause state.
    pub fn toggle_pause(&mut self) -> bool {
        let state = &mut self.state;
        if state.clock.toggle_pause() {
            state.momentum_before_pause = state.camera.suspend();
        } else {
            state.camera.resume(state.momentum_before_pause);
        }
        state.clock.is_paused()
    }

    /// Restore the startup camera, zero the signals, rewind the clock
    /// (running), and return the actors to their start poses.
    pub fn reset(&mut self) {
        log::info!("scene reset");
        self.state = SceneState::startup(&self.options);
    }

    /// Jump to a scripted viewpoint. Always leaves the clock paused.
    pub fn apply_viewpoint(&mut self, id: ViewpointId) {
        log::info!("viewpoint {id:?}");
        let viewpoint = id.viewpoint();
        let state = &mut self.state;

        state.clock.set_paused(true);
        state.momentum_before_pause = state.camera.suspend();

        state.clock.set_frame(viewpoint.frame);
        state.camera.position = viewpoint.camera_position;
        state.camera.heading = viewpoint.heading;
        state.poses = viewpoint.poses;
    }

    /// Controls summary built from the active key bindings.
    #[must_use]
    pub fn help_text(&self) -> String {
        let bindings = &self.options.keybindings;
        let mut text = String::from("*** Controls ***\n");
        for action in KeyAction::ALL {
            let key = bindings.key_for(action).unwrap_or("(unbound)");
            text.push('\n');
            text.push_str(key);
            text.push_str(": ");
            text.push_str(action.label());
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::animation::CYCLE_TICKS;
    use crate::input::ControlAxis;

    fn composer() -> SceneComposer {
        SceneComposer::new(Options::default())
    }

    fn steer(axis: ControlAxis, delta: f32) -> FlightCommand {
        FlightCommand::Steer { axis, delta }
    }

    #[test]
    fn startup_state() {
        let c = composer();
        assert_eq!(c.clock().frame(), -1);
        assert!(!c.clock().is_paused());
        assert_eq!(c.poses(), &ActorPoses::start());
        assert_eq!(c.camera().heading, 330.0);
        assert!((c.camera().position - Vec3::new(-0.6, -0.2, -1.8) * 0.0001)
            .length()
            < 1e-9);
        assert_eq!(c.projection().zfar, 10_000.0);
    }

    #[test]
    fn first_frame_is_zero() {
        let mut c = composer();
        let out = c.step();
        assert_eq!(out.frame, 0);
        assert_eq!(out.tick, 0);
        assert_eq!(out.actors[0].pose, ActorPoses::start().airplane);
        assert_eq!(out.actors[1].pose, ActorPoses::start().eagle);
        assert_eq!(c.stack.depth(), 0);
    }

    #[test]
    fn tick_always_in_cycle() {
        let mut c = composer();
        for _ in 0..1500 {
            let out = c.step();
            assert!(out.tick < CYCLE_TICKS);
            assert!(out.camera.momentum >= 0.0);
            assert!((0.0..360.0).contains(&out.camera.heading));
            for draw in &out.actors {
                assert!(draw.model_view.is_finite());
            }
        }
        assert_eq!(c.clock().frame(), 1499);
    }

    #[test]
    fn pause_freezes_frame_but_camera_turns() {
        let mut c = composer();
        let _ = c.step();
        let _ = c.step();
        let position = c.camera().position;
        let poses = *c.poses();

        assert_eq!(c.execute(FlightCommand::TogglePause), LoopControl::Continue);
        assert_eq!(c.camera().momentum, 0.0);
        let _ = c.execute(steer(ControlAxis::Rotate, 1.0));
        for _ in 0..3 {
            let out = c.step();
            assert_eq!(out.frame, 1);
            assert!(out.paused);
        }
        assert_eq!(c.poses(), &poses);
        assert_eq!(c.camera().position, position);
        // 100°/s at 25 fps.
        assert!((c.camera().heading - (330.0 + 12.0)).abs() < 1e-3);
    }

    #[test]
    fn unpause_restores_momentum() {
        let mut c = composer();
        let before = c.camera().momentum;
        assert!(before > 0.0);
        let _ = c.execute(FlightCommand::TogglePause);
        assert_eq!(c.camera().momentum, 0.0);
        let _ = c.execute(FlightCommand::TogglePause);
        assert_eq!(c.camera().momentum, before);
        assert!(!c.clock().is_paused());
    }

    #[test]
    fn stop_momentum() {
        let mut c = composer();
        let _ = c.execute(FlightCommand::StopMomentum);
        assert_eq!(c.camera().momentum, 0.0);
        let before = c.camera().position;
        let _ = c.step();
        assert_eq!(c.camera().position, before);
    }

    #[test]
    fn viewpoints_set_literals_and_pause() {
        for id in ViewpointId::ALL {
            let mut c = composer();
            for _ in 0..10 {
                let _ = c.step();
            }
            let _ = c.execute(FlightCommand::Viewpoint(id));
            let vp = id.viewpoint();
            assert!(c.clock().is_paused());
            assert_eq!(c.clock().frame(), vp.frame);
            assert_eq!(c.camera().position, vp.camera_position);
            assert_eq!(c.camera().heading, vp.heading);
            assert_eq!(c.camera().momentum, 0.0);
            assert_eq!(c.poses(), &vp.poses);

            // Paused with idle controls: nothing moves.
            let out = c.step();
            assert_eq!(out.frame, vp.frame);
            assert_eq!(out.camera.position, vp.camera_position);
            assert_eq!(c.poses(), &vp.poses);
        }
    }

    #[test]
    fn viewpoint_b_sits_before_cycle_start() {
        let mut c = composer();
        let _ = c.execute(FlightCommand::Viewpoint(ViewpointId::B));
        let out = c.step();
        assert_eq!(out.frame, -1);
        assert_eq!(out.tick, 719);
        let _ = c.execute(FlightCommand::TogglePause);
        let out = c.step();
        assert_eq!(out.frame, 0);
        assert_eq!(c.poses(), &ActorPoses::start());
    }

    #[test]
    fn reset_returns_to_startup() {
        let fresh = composer();
        let mut c = composer();
        let _ = c.execute(steer(ControlAxis::Accelerate, 1.0));
        let _ = c.execute(steer(ControlAxis::Elevate, -1.0));
        for _ in 0..200 {
            let _ = c.step();
        }
        let _ = c.execute(FlightCommand::TogglePause);
        let _ = c.execute(FlightCommand::Reset);

        assert_eq!(c.state(), fresh.state());
        assert!(c.signals().is_idle());

        let a = c.step();
        let mut fresh = fresh;
        let b = fresh.step();
        assert_eq!(a, b);
    }

    #[test]
    fn quit_and_help() {
        let mut c = composer();
        assert_eq!(c.execute(FlightCommand::Quit), LoopControl::Exit);
        let text = match c.execute(FlightCommand::ShowHelp) {
            LoopControl::Help(text) => text,
            other => unreachable!("expected help text, got {other:?}"),
        };
        assert!(text.starts_with("*** Controls ***"));
        assert!(text.contains("KeyW: Accelerate"));
        assert!(text.contains("Equal: Increase elevation"));
        assert!(text.contains("KeyY: Set viewpoint C"));
    }

    #[test]
    fn camera_and_world_matrices() {
        let mut c = composer();
        let out = c.step();
        assert_eq!(out.camera_matrix, out.camera.view_matrix());
        let expected = out.camera_matrix * scale(0.0001, 0.0001, 0.0001);
        assert!(out.world_matrix.abs_diff_eq(expected, 1e-9));
    }

    #[test]
    fn cloud_layers_follow_camera() {
        let mut c = composer();
        let out = c.step();
        let follow = follow_offset(out.camera.position, 0.0001);
        let base = out.world_matrix * translate(follow.x, follow.y, follow.z);
        for (layer, h) in out.cloud_layers.iter().zip([0.8, 0.2, -0.2, -0.8]) {
            let expected = base * translate(0.0, h, 0.0);
            assert!(layer.abs_diff_eq(expected, 1e-4), "{h}");
        }
    }

    #[test]
    fn actors_carry_scene_transform() {
        let mut c = composer();
        let mut out = c.step();
        for _ in 0..99 {
            out = c.step();
        }
        let depth = -1500.0 * 99.0 * 0.0001;
        let scene = out.world_matrix
            * rotate_y(30.0)
            * translate(0.0, 0.0, depth);
        let airplane = &out.actors[0];
        let expected = scene
            * airplane.pose.local_matrix()
            * Actor::Airplane.model_correction();
        assert_eq!(airplane.actor, Actor::Airplane);
        assert!(airplane.model_view.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn lights_are_reissued_each_frame() {
        let mut c = composer();
        let a = c.step();
        let b = c.step();
        assert_eq!(a.lights, b.lights);
        assert!((a.lights.sun.position.x - -10_000.0).abs() < 1e-2);
        assert_eq!(a.lights.sun.position.w, 1.0);
    }
}
