use crate::constants::*;
use crate::input;
use swipe_core::{Card, CardView, Destination, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            handler()
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to attach click handler", element_id);
    }
}

/// Logical viewport from the window's inner size.
pub fn viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width as f32, height as f32))
}

pub fn input_value(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_visible(document: &web::Document, id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        if visible {
            _ = cl.remove_1("hidden");
        } else {
            _ = cl.add_1("hidden");
        }
    }
}

pub fn show_screen(document: &web::Document, destination: Destination) {
    set_visible(document, SCREEN_LOGIN_ID, destination == Destination::Login);
    set_visible(document, SCREEN_REGISTER_ID, destination == Destination::Register);
    set_visible(document, SCREEN_MAIN_ID, destination == Destination::Main);
}

/// Position the card and fade its labels for this frame.
pub fn render_card(document: &web::Document, card: &web::HtmlElement, view: &CardView) {
    _ = card.set_attribute("style", &input::card_transform_css(view));
    if let Some(el) = document.get_element_by_id(LIKE_LABEL_ID) {
        _ = el.set_attribute("style", &input::opacity_css(view.feedback.accept_opacity));
    }
    if let Some(el) = document.get_element_by_id(NOPE_LABEL_ID) {
        _ = el.set_attribute("style", &input::opacity_css(view.feedback.reject_opacity));
    }
}

pub fn render_card_content(document: &web::Document, card: Option<&Card>) {
    let (title, description) = card
        .map(|c| (c.title.as_str(), c.description.as_str()))
        .unwrap_or(("", ""));
    set_text(document, CARD_TITLE_ID, title);
    set_text(document, CARD_DESCRIPTION_ID, description);
}
