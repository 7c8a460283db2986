#![cfg(target_arch = "wasm32")]
use crate::constants::CARD_ID;
use crate::frame::FrameContext;
use crate::input::PointerDrag;
use std::cell::RefCell;
use std::rc::Rc;
use swipe_core::{DeckController, NavigationStack, StaticDeckSource, SwipeConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

fn wire_viewport_resize(deck: &Rc<RefCell<DeckController>>) {
    let deck = deck.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Some(vp) = dom::viewport() {
            deck.borrow_mut().set_viewport(vp);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("swipe-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let card: web::HtmlElement = dom::element_by_id(&document, CARD_ID)?;

    let viewport = dom::viewport().unwrap_or_default();
    let deck = DeckController::from_source(&StaticDeckSource, &SwipeConfig::default(), viewport)?;
    log::info!(
        "[deck] {} cards, viewport {:.0}x{:.0}",
        deck.len(),
        viewport.width(),
        viewport.height()
    );
    let deck = Rc::new(RefCell::new(deck));
    let drag = Rc::new(RefCell::new(PointerDrag::default()));

    // Screens: start on login; the card screen becomes visible after sign-in
    let nav = Rc::new(RefCell::new(NavigationStack::default()));
    dom::show_screen(&document, nav.borrow().current());
    events::wire_auth_forms(&document, nav);

    wire_viewport_resize(&deck);
    events::wire_visibility_abort(&document, &deck, &drag);
    events::wire_input_handlers(events::InputWiring {
        card: card.clone(),
        deck: deck.clone(),
        drag,
    });

    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(deck, document, card)));
    frame::start_loop(frame_ctx);
    Ok(())
}
