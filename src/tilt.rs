use crate::constants::TILT_SELECTOR;
use crate::dom;
use crate::input::pointer_in_rect;
use portfolio_core::Tilt;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply_tilt(el: &web::HtmlElement, client_x: f32, client_y: f32) {
    let (pos, size) = pointer_in_rect(client_x, client_y, el);
    let tilt = Tilt::from_pointer(pos.x, pos.y, size.x, size.y);
    _ = el.style().set_property("transform", &tilt.to_css());
}

fn reset_tilt(el: &web::HtmlElement) {
    _ = el.style().set_property("transform", &Tilt::reset_css());
}

/// Perspective tilt that follows the pointer over every `[data-tilt]` element.
pub fn wire_tilt(document: &web::Document) {
    for el in dom::query_all(document, TILT_SELECTOR) {
        let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };

        let el_move = el.clone();
        dom::listen(&el, "mousemove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                apply_tilt(&el_move, ev.client_x() as f32, ev.client_y() as f32);
            }
        });

        let el_touch = el.clone();
        dom::listen_passive(&el, "touchmove", move |ev| {
            let Some(touch) = ev
                .dyn_ref::<web::TouchEvent>()
                .and_then(|t| t.touches().get(0))
            else {
                return;
            };
            apply_tilt(&el_touch, touch.client_x() as f32, touch.client_y() as f32);
        });

        for name in ["mouseleave", "touchend"] {
            let el_reset = el.clone();
            dom::listen(&el, name, move |_| reset_tilt(&el_reset));
        }
    }
}
