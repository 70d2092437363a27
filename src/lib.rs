#![cfg(target_arch = "wasm32")]
use crate::frame::SharedInput;
use portfolio_core::FrameInput;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod assets;
mod canvas;
mod constants;
mod contact;
mod dom;
mod forest;
mod frame;
mod input;
mod nav;
mod sky;
mod theme;
mod tilt;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    assets::set_footer_year(&document);

    let initial_theme = theme::stored_theme();
    theme::apply(&document, initial_theme);
    let shared: SharedInput = Rc::new(Cell::new(FrameInput {
        theme: initial_theme,
        ..FrameInput::default()
    }));

    nav::wire_mobile_nav(&document);
    nav::wire_scroll_spy(&document);
    input::wire_pointer_tracking(shared.clone());

    assets::probe_cv_link(&document);
    assets::detect_profile_image(&document);
    tilt::wire_tilt(&document);

    // Background canvases; each is inert if its element or context is missing.
    let sky = sky::Sky::mount(&document, shared.clone());
    theme::wire_toggle(&document, shared.clone(), move |t| sky.on_theme_change(t));
    forest::wire_forest_parallax(shared);

    contact::init_relay();
    contact::wire_contact_form(&document);
    contact::wire_copy_email(&document);

    log::info!("[init] theme={}", initial_theme.as_str());
    Ok(())
}
