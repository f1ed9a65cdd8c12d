use crate::dom;
use app_core::{
    Color, EventQueue, InputEvent, ParamEdit, SceneParams, OBJECTS_DISTANCE_RANGE,
    PARTICLE_SIZE_RANGE,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_ID: &str = "debug-panel";
const PANEL_STYLE: &str = "position:fixed;top:12px;right:12px;z-index:10;\
    padding:8px 10px;background:rgba(20,20,24,0.85);color:#eee;\
    font:12px/1.6 system-ui,sans-serif;border-radius:6px;";

fn add_row(
    document: &web::Document,
    panel: &web::Element,
    label: &str,
    input_type: &str,
    range: Option<((f32, f32), f32)>,
    value: &str,
) -> anyhow::Result<web::HtmlInputElement> {
    let js = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    let row = document.create_element("label").map_err(js)?;
    _ = row.set_attribute("style", "display:flex;gap:8px;align-items:center;");
    row.set_text_content(Some(label));
    let input: web::HtmlInputElement = document
        .create_element("input")
        .map_err(js)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("input element has unexpected type"))?;
    input.set_type(input_type);
    // Bounds first: range inputs sanitize the value against min/max/step.
    if let Some((bounds, step)) = range {
        set_range(&input, bounds, step);
    }
    input.set_value(value);
    row.append_child(&input).map_err(js)?;
    panel.append_child(&row).map_err(js)?;
    Ok(input)
}

fn set_range(input: &web::HtmlInputElement, (lo, hi): (f32, f32), step: f32) {
    _ = input.set_attribute("min", &lo.to_string());
    _ = input.set_attribute("max", &hi.to_string());
    _ = input.set_attribute("step", &step.to_string());
}

fn on_number(
    input: &web::HtmlInputElement,
    queue: &Rc<RefCell<EventQueue>>,
    edit: fn(f32) -> ParamEdit,
) {
    let q = queue.clone();
    let source = input.clone();
    dom::listen(input, "input", move |_: web::Event| {
        match source.value().parse::<f32>() {
            Ok(v) => q.borrow_mut().push(InputEvent::Param(edit(v))),
            Err(e) => log::warn!("[panel] bad number {:?}: {}", source.value(), e),
        }
    });
}

/// Build the floating tuning panel; each edit becomes a queued `InputEvent::Param`.
pub fn build(
    document: &web::Document,
    params: &SceneParams,
    queue: Rc<RefCell<EventQueue>>,
) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    let panel = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    panel.set_id(PANEL_ID);
    _ = panel.set_attribute("style", PANEL_STYLE);

    let color = add_row(
        document,
        &panel,
        "materialColor",
        "color",
        None,
        &params.material_color.to_hex(),
    )?;
    let q = queue.clone();
    let source = color.clone();
    dom::listen(&color, "input", move |_: web::Event| {
        match Color::from_hex(&source.value()) {
            Ok(c) => q.borrow_mut().push(InputEvent::Param(ParamEdit::MaterialColor(c))),
            Err(e) => log::warn!("[panel] {}", e),
        }
    });

    let distance = add_row(
        document,
        &panel,
        "objectsDistance",
        "range",
        Some((OBJECTS_DISTANCE_RANGE, 0.1)),
        &params.objects_distance.to_string(),
    )?;
    on_number(&distance, &queue, ParamEdit::ObjectsDistance);

    let size = add_row(
        document,
        &panel,
        "particleSize",
        "range",
        Some((PARTICLE_SIZE_RANGE, 0.005)),
        &params.particle_size.to_string(),
    )?;
    on_number(&size, &queue, ParamEdit::ParticleSize);

    body.append_child(&panel)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
