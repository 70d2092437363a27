use crate::constants::THEME_TOGGLE_SELECTOR;
use crate::dom;
use crate::frame::SharedInput;
use portfolio_core::{Theme, LIGHT_BODY_CLASS, THEME_STORAGE_KEY};
use web_sys as web;

#[inline]
fn storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn stored_theme() -> Theme {
    let stored = storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(cl) = dom::body_class_list(document) {
        _ = cl.toggle_with_force(LIGHT_BODY_CLASS, theme.is_light());
    }
}

/// Flip the theme on click, persist it, and nudge resize/scroll listeners so
/// the background and parallax pick up the change immediately.
pub fn wire_toggle(
    document: &web::Document,
    input: SharedInput,
    on_change: impl Fn(Theme) + 'static,
) {
    let Ok(Some(button)) = document.query_selector(THEME_TOGGLE_SELECTOR) else {
        return;
    };
    let doc = document.clone();
    dom::add_click_listener(&button, move || {
        let theme = input.get().theme.toggled();
        apply(&doc, theme);
        if let Some(s) = storage() {
            _ = s.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
        let mut snapshot = input.get();
        snapshot.theme = theme;
        input.set(snapshot);
        log::info!("[theme] {}", theme.as_str());
        on_change(theme);
        dom::dispatch_window_event("resize");
        dom::dispatch_window_event("scroll");
    });
}
