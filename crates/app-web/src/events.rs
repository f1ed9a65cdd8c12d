use crate::dom;
use app_core::{EventQueue, InputEvent};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Forward pointer, scroll and resize notifications into the frame queue.
pub fn wire_input_handlers(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    queue: Rc<RefCell<EventQueue>>,
) {
    let q = queue.clone();
    dom::listen(window, "pointermove", move |ev: web::PointerEvent| {
        q.borrow_mut().push(InputEvent::PointerMove {
            x: ev.client_x() as f32,
            y: ev.client_y() as f32,
        });
    });

    let q = queue.clone();
    let win = window.clone();
    dom::listen(window, "scroll", move |_: web::Event| {
        q.borrow_mut().push(InputEvent::Scroll {
            y: dom::scroll_y(&win),
        });
    });

    let win = window.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        dom::sync_canvas_backing_size(&canvas);
        let vp = dom::viewport(&win);
        queue.borrow_mut().push(InputEvent::Resize {
            width: vp.width,
            height: vp.height,
        });
    });
}
