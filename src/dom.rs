use portfolio_core::SurfaceSize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn body_class_list(document: &web::Document) -> Option<web::DomTokenList> {
    document.body().map(|b| b.class_list())
}

/// Attach a listener that lives for the rest of the page.
pub fn listen(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Same as [`listen`], registered as passive.
pub fn listen_passive(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    listen(element, "click", move |_: web::Event| handler());
}

pub fn dispatch_window_event(name: &str) {
    if let Some(w) = web::window() {
        if let Ok(ev) = web::Event::new(name) {
            _ = w.dispatch_event(&ev);
        }
    }
}

pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

/// Elements matching `selector`, in document order.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn location_protocol() -> Option<String> {
    web::window().and_then(|w| w.location().protocol().ok())
}

pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (1.0, 1.0);
    };
    let fallback = w
        .document()
        .and_then(|d| d.document_element())
        .map(|el| (el.client_width() as f64, el.client_height() as f64))
        .unwrap_or((1.0, 1.0));
    let iw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(fallback.0);
    let ih = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(fallback.1);
    (iw as f32, ih as f32)
}

/// Match the canvas backing store to its CSS size times the (clamped) device
/// pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let size = SurfaceSize::from_layout(
        canvas.client_width() as f32,
        canvas.client_height() as f32,
        dpr as f32,
    );
    canvas.set_width(size.backing_width);
    canvas.set_height(size.backing_height);
    size
}
