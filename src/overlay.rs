use crate::constants::{CARD_ID, DECK_EMPTY_ID};
use web_sys as web;

// "No More Profiles" panel shown in place of the card once the deck runs out.

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(DECK_EMPTY_ID) {
        _ = el.class_list().remove_1("hidden");
    }
    if let Some(card) = document.get_element_by_id(CARD_ID) {
        _ = card.class_list().add_1("hidden");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(DECK_EMPTY_ID) {
        _ = el.class_list().add_1("hidden");
    }
    if let Some(card) = document.get_element_by_id(CARD_ID) {
        _ = card.class_list().remove_1("hidden");
    }
}

#[inline]
pub fn set_exhausted(document: &web::Document, exhausted: bool) {
    if exhausted {
        log::info!("[ui] no more profiles");
        show(document);
    } else {
        hide(document);
    }
}
