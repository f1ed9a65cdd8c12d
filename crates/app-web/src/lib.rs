#![cfg(target_arch = "wasm32")]
use app_core::{EventQueue, SceneParams, SceneState, GRADIENT_PATH};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod dom;
mod events;
mod frame;
mod panel;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .query_selector("canvas.webgl")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing canvas.webgl"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let viewport = dom::viewport(&window);
    let state = SceneState::new(SceneParams::default(), viewport, dom::scroll_y(&window));
    log::info!(
        "[scene] objects={} particles={} viewport={}x{}",
        state.objects.len(),
        state.particles.len(),
        viewport.width,
        viewport.height
    );

    let queue = Rc::new(RefCell::new(EventQueue::new()));
    events::wire_input_handlers(&window, canvas.clone(), queue.clone());
    if let Err(e) = panel::build(&document, &state.params, queue.clone()) {
        log::warn!("debug panel unavailable: {:?}", e);
    }

    let gradient = assets::load_gradient(&window, GRADIENT_PATH).await;
    let gpu = frame::init_gpu(&canvas, &gradient).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state: Some(state),
        queue,
        canvas,
        gpu,
        clock_start: Instant::now(),
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);
    Ok(())
}
