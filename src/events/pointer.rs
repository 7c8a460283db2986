use crate::input::PointerDrag;
use std::cell::RefCell;
use std::rc::Rc;
use swipe_core::DeckController;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub card: web::HtmlElement,
    pub deck: Rc<RefCell<DeckController>>,
    pub drag: Rc<RefCell<PointerDrag>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let card_for_listener = w.card.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.drag.borrow().active {
            return;
        }
        if !w.deck.borrow_mut().on_gesture_start() {
            return;
        }
        *w.drag.borrow_mut() =
            PointerDrag::begin(ev.pointer_id(), ev.client_x() as f32, ev.client_y() as f32);
        _ = w.card.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = card_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let disp = w.drag.borrow().displacement(
            ev.pointer_id(),
            ev.client_x() as f32,
            ev.client_y() as f32,
        );
        let Some(d) = disp else {
            return;
        };
        w.deck.borrow_mut().on_gesture_move(d.x, d.y);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let disp = w.drag.borrow().displacement(
            ev.pointer_id(),
            ev.client_x() as f32,
            ev.client_y() as f32,
        );
        let Some(d) = disp else {
            return;
        };
        w.drag.borrow_mut().finish();
        if let Some(decision) = w.deck.borrow_mut().on_gesture_end(d.x, d.y) {
            log::info!("[pointer] release -> {:?}", decision);
        }
        _ = w.card.release_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// The browser took the pointer away (scroll, system gesture): drop the drag
// without classifying it.
fn wire_pointercancel(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let owns_pointer = {
            let drag = w.drag.borrow();
            drag.active && drag.pointer_id == ev.pointer_id()
        };
        if !owns_pointer {
            return;
        }
        w.drag.borrow_mut().finish();
        w.deck.borrow_mut().abort_animation();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Abort any drag or animation when the page is hidden.
pub fn wire_visibility_abort(
    document: &web::Document,
    deck: &Rc<RefCell<DeckController>>,
    drag: &Rc<RefCell<PointerDrag>>,
) {
    let doc = document.clone();
    let deck = deck.clone();
    let drag = drag.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if doc.hidden() {
            drag.borrow_mut().finish();
            deck.borrow_mut().abort_animation();
        }
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
