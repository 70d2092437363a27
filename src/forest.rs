use crate::dom;
use crate::frame::SharedInput;
use portfolio_core::forest_background_position;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Light-theme backdrop that shifts with scroll and pointer. Updates are
/// coalesced to at most one per animation frame.
pub fn wire_forest_parallax(input: SharedInput) {
    let Some(window) = web::window() else {
        return;
    };
    let ticking = Rc::new(Cell::new(false));

    let update = {
        let ticking = ticking.clone();
        move || {
            ticking.set(false);
            let snapshot = input.get();
            if !snapshot.theme.is_light() {
                return;
            }
            let Some(body) = dom::window_document().and_then(|d| d.body()) else {
                return;
            };
            let scroll_y = web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            let pos = forest_background_position(scroll_y as f32, snapshot.pointer);
            _ = body.style().set_property("background-position", &pos);
        }
    };
    update();

    let frame_cb: Rc<Closure<dyn FnMut()>> =
        Rc::new(Closure::wrap(Box::new(update) as Box<dyn FnMut()>));
    for name in ["scroll", "mousemove"] {
        let ticking = ticking.clone();
        let frame_cb = frame_cb.clone();
        dom::listen_passive(&window, name, move |_| {
            if ticking.get() {
                return;
            }
            if let Some(w) = web::window() {
                if w
                    .request_animation_frame((*frame_cb).as_ref().unchecked_ref())
                    .is_ok()
                {
                    ticking.set(true);
                }
            }
        });
    }
}
