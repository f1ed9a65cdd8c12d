use crate::render;
use app_core::{run, EventQueue, GradientMap, SceneState, Tick};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub state: Option<SceneState>,
    pub queue: Rc<RefCell<EventQueue>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub clock_start: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = self.clock_start.elapsed().as_secs_f32();
        let events = self.queue.borrow_mut().drain();
        let Some(state) = self.state.take() else {
            return;
        };
        let mut state = run(state, Tick::new(elapsed, events));
        let frame = state.render_frame();

        if let Some(g) = &mut self.gpu {
            if frame.layout_changed {
                g.set_particles(&state.particles);
            }
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&frame) {
                log::error!("render error: {:?}", e);
            }
        }
        self.state = Some(state);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    gradient: &GradientMap,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, gradient).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// Drive `FrameContext::frame` from `requestAnimationFrame` for the page lifetime.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
