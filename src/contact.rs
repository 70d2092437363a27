use crate::constants::*;
use crate::dom;
use portfolio_core::contact::{
    ContactMessage, StatusKind, STATUS_MISSING_FIELDS, STATUS_SENDING, STATUS_SENT,
    STATUS_SENT_MAILTO, SUBMIT_LABEL, SUBMIT_LABEL_BUSY,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// EmailJS browser SDK, loaded by the page as a global.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = emailjs, js_name = init, catch)]
    fn emailjs_init(public_key: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = emailjs, js_name = send, catch)]
    fn emailjs_send(
        service_id: &str,
        template_id: &str,
        params: &JsValue,
    ) -> Result<js_sys::Promise, JsValue>;
}

pub fn init_relay() {
    if let Err(e) = emailjs_init(EMAILJS_PUBLIC_KEY) {
        log::warn!("[contact] relay unavailable: {:?}", e);
    }
}

async fn send_via_relay(msg: &ContactMessage) -> anyhow::Result<()> {
    let params = js_sys::Object::new();
    for (key, value) in msg.template_params(CONTACT_EMAIL) {
        js_sys::Reflect::set(&params, &key.into(), &value.into())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    let promise = emailjs_send(EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID, &params)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let result = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let status = js_sys::Reflect::get(&result, &"status".into())
        .ok()
        .and_then(|v| v.as_f64());
    if status == Some(EMAILJS_OK_STATUS) {
        Ok(())
    } else {
        Err(anyhow::anyhow!("relay status {:?}", status))
    }
}

fn open_mailto(msg: &ContactMessage) {
    let draft = msg.mailto_draft(CONTACT_OWNER, SITE_NAME);
    let url = draft.to_url(CONTACT_EMAIL, |s| String::from(js_sys::encode_uri_component(s)));
    if let Some(w) = web::window() {
        _ = w.open_with_url_and_target(&url, "_blank");
    }
}

fn show_status(status: &web::Element, message: &str, kind: StatusKind) {
    status.set_text_content(Some(message));
    status.set_class_name(kind.class_name());
    if kind.auto_clears() {
        let status = status.clone();
        dom::set_timeout(STATUS_CLEAR_MS, move || {
            status.set_text_content(Some(""));
            status.set_class_name(FORM_STATUS_CLASS);
        });
    }
}

fn field(data: &web::FormData, name: &str) -> Option<String> {
    data.get(name).as_string()
}

pub fn wire_contact_form(document: &web::Document) {
    let (Some(form), Some(status)) = (
        document
            .get_element_by_id(CONTACT_FORM_ID)
            .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok()),
        document.get_element_by_id(FORM_STATUS_ID),
    ) else {
        return;
    };

    let form_submit = form.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let Ok(data) = web::FormData::new_with_form(&form_submit) else {
            return;
        };
        let msg = match ContactMessage::from_fields(
            field(&data, "name"),
            field(&data, "email"),
            field(&data, "subject"),
            field(&data, "message"),
        ) {
            Ok(m) => m,
            Err(e) => {
                log::info!("[contact] rejected: {}", e);
                show_status(&status, STATUS_MISSING_FIELDS, StatusKind::Error);
                return;
            }
        };

        show_status(&status, STATUS_SENDING, StatusKind::Loading);
        let button = form_submit
            .query_selector(SUBMIT_BUTTON_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
        if let Some(b) = &button {
            b.set_disabled(true);
            b.set_text_content(Some(SUBMIT_LABEL_BUSY));
        }

        let form = form_submit.clone();
        let status = status.clone();
        spawn_local(async move {
            match send_via_relay(&msg).await {
                Ok(()) => {
                    log::info!("[contact] sent via relay");
                    show_status(&status, STATUS_SENT, StatusKind::Success);
                }
                Err(e) => {
                    log::error!("[contact] relay failed: {:?}", e);
                    open_mailto(&msg);
                    show_status(&status, STATUS_SENT_MAILTO, StatusKind::Success);
                }
            }
            form.reset();
            if let Some(b) = &button {
                b.set_disabled(false);
                b.set_text_content(Some(SUBMIT_LABEL));
            }
        });
    });
}

async fn write_clipboard(text: &str) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let navigator = window.navigator();
    let Ok(clipboard) = js_sys::Reflect::get(&navigator, &"clipboard".into()) else {
        return false;
    };
    if clipboard.is_undefined() || clipboard.is_null() {
        return false;
    }
    let Some(write) = js_sys::Reflect::get(&clipboard, &"writeText".into())
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    else {
        return false;
    };
    let Ok(promise) = write
        .call1(&clipboard, &text.into())
        .and_then(|p| p.dyn_into::<js_sys::Promise>())
    else {
        return false;
    };
    JsFuture::from(promise).await.is_ok()
}

/// Hidden-textarea copy for browsers without the async clipboard API.
fn copy_with_textarea(document: &web::Document, text: &str) {
    let Some(body) = document.body() else {
        return;
    };
    let Some(area) = document
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
    else {
        return;
    };
    area.set_value(text);
    if body.append_child(&area).is_err() {
        return;
    }
    area.select();
    if let Some(html) = document.dyn_ref::<web::HtmlDocument>() {
        _ = html.exec_command("copy");
    }
    _ = body.remove_child(&area);
}

pub fn wire_copy_email(document: &web::Document) {
    let Some(button) = document.get_element_by_id(COPY_EMAIL_ID) else {
        return;
    };
    let doc = document.clone();
    let button_click = button.clone();
    dom::add_click_listener(&button, move || {
        let doc = doc.clone();
        let button = button_click.clone();
        spawn_local(async move {
            if !write_clipboard(CONTACT_EMAIL).await {
                copy_with_textarea(&doc, CONTACT_EMAIL);
            }
            button.set_text_content(Some(COPY_LABEL_DONE));
            dom::set_timeout(COPY_LABEL_RESET_MS, move || {
                button.set_text_content(Some(COPY_LABEL));
            });
        });
    });
}
