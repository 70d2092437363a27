use crate::constants::{CV_BUTTON_ID, PROFILE_IMG_SELECTOR, YEAR_ID};
use crate::dom;
use portfolio_core::{is_http_protocol, PROFILE_IMAGE_CANDIDATES};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn set_footer_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

#[inline]
fn served_over_http() -> bool {
    dom::location_protocol()
        .map(|p| is_http_protocol(&p))
        .unwrap_or(false)
}

/// HEAD request; any network failure counts as missing.
async fn exists(url: &str) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let init = web::RequestInit::new();
    init.set_method("HEAD");
    let Ok(resp) = JsFuture::from(window.fetch_with_str_and_init(url, &init)).await else {
        return false;
    };
    resp.dyn_into::<web::Response>()
        .map(|r| r.ok())
        .unwrap_or(false)
}

/// Hide the CV download button when its file is not deployed.
pub fn probe_cv_link(document: &web::Document) {
    let Some(button) = document.get_element_by_id(CV_BUTTON_ID) else {
        return;
    };
    if !served_over_http() {
        return;
    }
    let Some(href) = button.get_attribute("href") else {
        return;
    };
    spawn_local(async move {
        if !exists(&href).await {
            log::info!("[assets] {} not found, hiding CV button", href);
            if let Some(el) = button.dyn_ref::<web::HtmlElement>() {
                _ = el.style().set_property("display", "none");
            }
        }
    });
}

/// Swap the hero placeholder for the first profile photo that exists.
pub fn detect_profile_image(document: &web::Document) {
    let Some(img) = document
        .query_selector(PROFILE_IMG_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
    else {
        return;
    };
    if !served_over_http() {
        return;
    }
    spawn_local(async move {
        for url in PROFILE_IMAGE_CANDIDATES {
            if exists(url).await {
                log::info!("[assets] profile image {}", url);
                img.set_src(url);
                return;
            }
        }
    });
}
