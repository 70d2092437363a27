use crate::dom;
use crate::frame::SharedInput;
use glam::Vec2;
use portfolio_core::normalize_pointer;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position relative to an element's top-left corner, plus its size.
#[inline]
pub fn pointer_in_rect(client_x: f32, client_y: f32, el: &web::Element) -> (Vec2, Vec2) {
    let rect = el.get_bounding_client_rect();
    (
        Vec2::new(client_x - rect.left() as f32, client_y - rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}

/// Keep the shared normalized pointer current for both themes' parallax.
pub fn wire_pointer_tracking(input: SharedInput) {
    let Some(w) = web::window() else {
        return;
    };
    dom::listen_passive(&w, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (vw, vh) = dom::viewport_size();
        let mut snapshot = input.get();
        snapshot.pointer = normalize_pointer(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
        input.set(snapshot);
    });
}
