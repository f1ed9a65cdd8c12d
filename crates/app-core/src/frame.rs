//! Per-refresh update of the scroll scene.
//!
//! All mutable page state lives in [`SceneState`]; the host feeds it a [`Tick`]
//! (elapsed time plus the events queued since the last frame) and draws the
//! [`RenderFrame`] it produces. Nothing here touches the DOM or the GPU.

use crate::constants::*;
use crate::events::{EventBatch, InputEvent};
use crate::input::{cursor_offset, parallax_target};
use crate::params::SceneParams;
use crate::scene;
use crate::section::SectionTracker;
use crate::state::{Camera, Light, TrackedObject, Viewport};
use crate::tween::RotationTween;
use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;

/// Input for one frame step.
#[derive(Clone, Debug, Default)]
pub struct Tick {
    /// Seconds since the clock started (monotonic).
    pub elapsed: f32,
    pub events: EventBatch,
}

impl Tick {
    pub fn new(elapsed: f32, events: EventBatch) -> Self {
        Self { elapsed, events }
    }

    pub fn at(elapsed: f32) -> Self {
        Self {
            elapsed,
            events: EventBatch::new(),
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct RenderFrame {
    pub view_proj: Mat4,
    pub models: SmallVec<[Mat4; 4]>,
    /// Linear RGB.
    pub material_color: [f32; 3],
    pub light: Light,
    pub particle_size: f32,
    pub aspect: f32,
    /// Particles (and object positions) changed since the previous frame.
    pub layout_changed: bool,
}

pub struct SceneState {
    pub params: SceneParams,
    pub viewport: Viewport,
    pub camera: Camera,
    /// Parallax offset of the camera rig.
    pub rig: Vec2,
    pub cursor: Vec2,
    pub scroll_y: f32,
    pub objects: Vec<TrackedObject>,
    pub particles: Vec<Vec3>,
    pub light: Light,
    section: SectionTracker,
    tweens: Vec<RotationTween>,
    previous_t: f32,
    kicks: u64,
    layout_changed: bool,
}

impl SceneState {
    pub fn new(params: SceneParams, viewport: Viewport, scroll_y: f32) -> Self {
        let objects = scene::build_objects(params.objects_distance);
        let particles =
            scene::build_particles(params.particle_count, params.objects_distance, objects.len());
        Self {
            camera: Camera::new(viewport.aspect()),
            viewport,
            rig: Vec2::ZERO,
            cursor: Vec2::ZERO,
            scroll_y,
            objects,
            particles,
            light: Light::default(),
            section: SectionTracker::new(0),
            tweens: Vec::new(),
            previous_t: 0.0,
            kicks: 0,
            layout_changed: true,
            params,
        }
    }

    pub fn current_section(&self) -> usize {
        self.section.current()
    }

    /// Number of section kicks started so far.
    pub fn kick_count(&self) -> u64 {
        self.kicks
    }

    pub fn active_tweens(&self) -> &[RotationTween] {
        &self.tweens
    }

    /// Camera height for the current scroll position.
    pub fn scroll_camera_y(&self) -> f32 {
        if self.viewport.height <= 0.0 {
            return 0.0;
        }
        -self.scroll_y / self.viewport.height * self.params.objects_distance
    }

    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::PointerMove { x, y } => {
                self.cursor = cursor_offset(*x, *y, self.viewport.width, self.viewport.height);
            }
            InputEvent::Scroll { y } => {
                self.scroll_y = *y;
                let count = self.objects.len();
                if let Some(next) = self.section.observe(*y, self.viewport.height, count) {
                    self.start_kick(next);
                }
            }
            InputEvent::Resize { width, height } => {
                self.viewport = Viewport::new(*width, *height);
                self.camera.aspect = self.viewport.aspect();
                log::debug!("[frame] resize {}x{}", width, height);
            }
            InputEvent::Param(edit) => match self.params.apply(edit) {
                Ok(true) => {
                    scene::relayout(&mut self.objects, self.params.objects_distance);
                    self.particles = scene::build_particles(
                        self.params.particle_count,
                        self.params.objects_distance,
                        self.objects.len(),
                    );
                    self.layout_changed = true;
                }
                Ok(false) => {}
                Err(e) => log::warn!("[params] ignored edit: {}", e),
            },
        }
    }

    fn start_kick(&mut self, target: usize) {
        log::debug!("[frame] section change -> kick object {}", target);
        self.tweens.push(RotationTween::new(
            target,
            Vec3::from(KICK_OFFSET),
            KICK_DURATION_SEC,
        ));
        self.kicks += 1;
    }

    /// Advance one frame in place.
    pub fn step(&mut self, tick: &Tick) {
        let mut dt = tick.elapsed - self.previous_t;
        self.previous_t = tick.elapsed;
        if let Some(max) = self.params.max_frame_delta {
            dt = dt.min(max);
        }

        // Kicks started by this tick's events begin advancing next tick.
        let running = self.tweens.len();
        for ev in &tick.events {
            self.apply_event(ev);
        }

        for obj in &mut self.objects {
            obj.rotation.x += dt * SPIN_RATE_X;
            obj.rotation.y += dt * SPIN_RATE_Y;
        }

        for tween in &mut self.tweens[..running] {
            let delta = tween.advance(dt);
            if let Some(obj) = self.objects.get_mut(tween.target) {
                obj.rotation += delta;
            }
        }
        self.tweens.retain(|t| !t.is_finished());

        // First-order follow; the blend factor saturates so long frames land on
        // the target instead of overshooting it.
        let target = parallax_target(self.cursor);
        let blend = (PARALLAX_SMOOTHING * dt).clamp(0.0, 1.0);
        self.rig += (target - self.rig) * blend;

        self.camera.position.y = self.scroll_camera_y();
    }

    /// Snapshot for the renderer. Clears the layout-changed flag.
    pub fn render_frame(&mut self) -> RenderFrame {
        let layout_changed = std::mem::take(&mut self.layout_changed);
        RenderFrame {
            view_proj: self.camera.view_proj(self.rig),
            models: self.objects.iter().map(TrackedObject::model_matrix).collect(),
            material_color: self.params.material_color.to_linear().to_array(),
            light: self.light,
            particle_size: self.params.particle_size,
            aspect: self.camera.aspect,
            layout_changed,
        }
    }
}

/// Pure frame step: consume the previous state, return the next one.
pub fn run(mut state: SceneState, tick: Tick) -> SceneState {
    state.step(&tick);
    state
}
