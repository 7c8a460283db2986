/// DOM wiring and frame pacing constants for the web frontend.
///
/// Element ids mirror the markup in `index.html`; keeping them here keeps
/// string literals out of the wiring code.
// Screens
pub const SCREEN_LOGIN_ID: &str = "screen-login";
pub const SCREEN_REGISTER_ID: &str = "screen-register";
pub const SCREEN_MAIN_ID: &str = "screen-main";

// Swipe card
pub const CARD_ID: &str = "swipe-card";
pub const CARD_TITLE_ID: &str = "card-title";
pub const CARD_DESCRIPTION_ID: &str = "card-description";
pub const LIKE_LABEL_ID: &str = "like-label";
pub const NOPE_LABEL_ID: &str = "nope-label";
pub const DECK_EMPTY_ID: &str = "deck-empty";

// Login form
pub const LOGIN_EMAIL_ID: &str = "login-email";
pub const LOGIN_PASSWORD_ID: &str = "login-password";
pub const LOGIN_SUBMIT_ID: &str = "login-submit";
pub const LOGIN_REGISTER_LINK_ID: &str = "login-register-link";

// Register form
pub const REGISTER_NAME_ID: &str = "register-name";
pub const REGISTER_EMAIL_ID: &str = "register-email";
pub const REGISTER_PASSWORD_ID: &str = "register-password";
pub const REGISTER_CONFIRM_ID: &str = "register-confirm";
pub const REGISTER_SUBMIT_ID: &str = "register-submit";
pub const REGISTER_LOGIN_LINK_ID: &str = "register-login-link";
pub const REGISTER_ERROR_ID: &str = "register-error";

// Frame pacing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches so animations do not jump

pub const ALL_ELEMENT_IDS: &[&str] = &[
    SCREEN_LOGIN_ID,
    SCREEN_REGISTER_ID,
    SCREEN_MAIN_ID,
    CARD_ID,
    CARD_TITLE_ID,
    CARD_DESCRIPTION_ID,
    LIKE_LABEL_ID,
    NOPE_LABEL_ID,
    DECK_EMPTY_ID,
    LOGIN_EMAIL_ID,
    LOGIN_PASSWORD_ID,
    LOGIN_SUBMIT_ID,
    LOGIN_REGISTER_LINK_ID,
    REGISTER_NAME_ID,
    REGISTER_EMAIL_ID,
    REGISTER_PASSWORD_ID,
    REGISTER_CONFIRM_ID,
    REGISTER_SUBMIT_ID,
    REGISTER_LOGIN_LINK_ID,
    REGISTER_ERROR_ID,
];
