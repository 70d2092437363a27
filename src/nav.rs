use crate::constants::*;
use crate::dom;
use portfolio_core::active_section;
use web_sys as web;

pub fn wire_mobile_nav(document: &web::Document) {
    let toggle = document.query_selector(NAV_TOGGLE_SELECTOR).ok().flatten();
    let list = document.get_element_by_id(NAV_LIST_ID);

    if let Some(t) = &toggle {
        let t_click = t.clone();
        let list_click = list.clone();
        dom::add_click_listener(t, move || {
            let expanded = t_click.get_attribute("aria-expanded").as_deref() == Some("true");
            _ = t_click.set_attribute("aria-expanded", if expanded { "false" } else { "true" });
            if let Some(l) = &list_click {
                _ = l.class_list().toggle(NAV_OPEN_CLASS);
            }
        });
    }

    let Some(list) = list else {
        return;
    };
    for link in dom::query_all(document, &format!("#{} a", NAV_LIST_ID)) {
        let list_close = list.clone();
        let toggle_close = toggle.clone();
        dom::add_click_listener(&link, move || {
            _ = list_close.class_list().remove_1(NAV_OPEN_CLASS);
            if let Some(t) = &toggle_close {
                _ = t.set_attribute("aria-expanded", "false");
            }
        });
    }
}

/// Nav links paired with the section their `href` points at. Links whose
/// target is missing are left out.
fn linked_sections(document: &web::Document) -> Vec<(web::Element, web::Element)> {
    dom::query_all(document, NAV_LINKS_SELECTOR)
        .into_iter()
        .filter_map(|link| {
            let href = link.get_attribute("href")?;
            if !href.starts_with('#') || href.len() < 2 {
                return None;
            }
            let section = document.query_selector(&href).ok().flatten()?;
            Some((link, section))
        })
        .collect()
}

/// Highlight the nav link of the section currently under the sticky header.
pub fn wire_scroll_spy(document: &web::Document) {
    let pairs = linked_sections(document);
    let update = move || {
        let scroll_y = web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
        let tops: Vec<f64> = pairs
            .iter()
            .map(|(_, sec)| sec.get_bounding_client_rect().top() + scroll_y)
            .collect();
        let current = active_section(scroll_y, &tops);
        for (i, (link, _)) in pairs.iter().enumerate() {
            _ = link
                .class_list()
                .toggle_with_force(NAV_ACTIVE_CLASS, current == Some(i));
        }
    };
    update();
    if let Some(w) = web::window() {
        dom::listen_passive(&w, "scroll", move |_| update());
    }
}
