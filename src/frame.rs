use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::input;
use crate::overlay;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use swipe_core::DeckController;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub deck: Rc<RefCell<DeckController>>,
    pub document: web::Document,
    pub card: web::HtmlElement,
    pub last_instant: Instant,
    // Deck index whose content is currently in the DOM
    pub shown_index: Option<usize>,
}

impl FrameContext {
    pub fn new(
        deck: Rc<RefCell<DeckController>>,
        document: web::Document,
        card: web::HtmlElement,
    ) -> Self {
        Self {
            deck,
            document,
            card,
            last_instant: Instant::now(),
            shown_index: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut deck = self.deck.borrow_mut();
        if let Some(ev) = deck.tick(input::clamp_frame_dt(dt_sec, MAX_FRAME_DT_SEC)) {
            log::debug!("[frame] animation settled: {:?}", ev);
        }

        let index = deck.current_index();
        if self.shown_index != Some(index) {
            dom::render_card_content(&self.document, deck.current_card());
            overlay::set_exhausted(&self.document, deck.is_exhausted());
            self.shown_index = Some(index);
        }
        dom::render_card(&self.document, &self.card, &deck.card_view());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
