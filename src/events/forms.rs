use crate::constants::*;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use swipe_core::{
    open_register, return_to_login, submit_login, submit_register, LoginForm, NavigationStack,
    RegisterForm,
};
use web_sys as web;

/// Wire the login and register screens to the shared navigation stack.
pub fn wire_auth_forms(document: &web::Document, nav: Rc<RefCell<NavigationStack>>) {
    wire_login(document, &nav);
    wire_register(document, &nav);
}

fn wire_login(document: &web::Document, nav: &Rc<RefCell<NavigationStack>>) {
    let doc = document.clone();
    let nav_submit = nav.clone();
    dom::add_click_listener(document, LOGIN_SUBMIT_ID, move || {
        let form = LoginForm {
            email: dom::input_value(&doc, LOGIN_EMAIL_ID),
            password: dom::input_value(&doc, LOGIN_PASSWORD_ID),
        };
        let mut nav = nav_submit.borrow_mut();
        if submit_login(&form, &mut *nav).is_ok() {
            dom::show_screen(&doc, nav.current());
        }
    });

    let doc = document.clone();
    let nav_link = nav.clone();
    dom::add_click_listener(document, LOGIN_REGISTER_LINK_ID, move || {
        let mut nav = nav_link.borrow_mut();
        open_register(&mut *nav);
        dom::set_text(&doc, REGISTER_ERROR_ID, "");
        dom::show_screen(&doc, nav.current());
    });
}

fn wire_register(document: &web::Document, nav: &Rc<RefCell<NavigationStack>>) {
    let doc = document.clone();
    let nav_submit = nav.clone();
    dom::add_click_listener(document, REGISTER_SUBMIT_ID, move || {
        let form = RegisterForm {
            name: dom::input_value(&doc, REGISTER_NAME_ID),
            email: dom::input_value(&doc, REGISTER_EMAIL_ID),
            password: dom::input_value(&doc, REGISTER_PASSWORD_ID),
            confirm_password: dom::input_value(&doc, REGISTER_CONFIRM_ID),
        };
        let mut nav = nav_submit.borrow_mut();
        match submit_register(&form, &mut *nav) {
            Ok(()) => {
                dom::set_visible(&doc, REGISTER_ERROR_ID, false);
                dom::show_screen(&doc, nav.current());
            }
            Err(e) => {
                dom::set_text(&doc, REGISTER_ERROR_ID, &e.to_string());
                dom::set_visible(&doc, REGISTER_ERROR_ID, true);
            }
        }
    });

    let doc = document.clone();
    let nav_link = nav.clone();
    dom::add_click_listener(document, REGISTER_LOGIN_LINK_ID, move || {
        let mut nav = nav_link.borrow_mut();
        return_to_login(&mut *nav);
        dom::show_screen(&doc, nav.current());
    });
}
