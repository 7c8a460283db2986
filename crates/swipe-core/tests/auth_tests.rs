// Host-side tests for the stubbed credential screens and navigation.

use swipe_core::*;

/// Navigator that records every call.
#[derive(Default)]
struct RecordingNavigator {
    calls: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn replace(&mut self, destination: Destination) {
        self.calls.push(format!("replace {destination:?}"));
    }
    fn push(&mut self, destination: Destination) {
        self.calls.push(format!("push {destination:?}"));
    }
    fn back(&mut self) {
        self.calls.push("back".to_string());
    }
}

fn register_form(password: &str, confirm: &str) -> RegisterForm {
    RegisterForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        password: password.into(),
        confirm_password: confirm.into(),
    }
}

#[test]
fn register_mismatch_blocks_navigation() {
    let mut nav = RecordingNavigator::default();
    let result = submit_register(&register_form("abc", "xyz"), &mut nav);
    assert_eq!(result, Err(AuthError::PasswordMismatch));
    assert!(nav.calls.is_empty());
}

#[test]
fn register_mismatch_has_user_facing_message() {
    assert_eq!(
        AuthError::PasswordMismatch.to_string(),
        "Passwords do not match"
    );
}

#[test]
fn register_success_replaces_with_main() {
    let mut nav = RecordingNavigator::default();
    submit_register(&register_form("secret", "secret"), &mut nav).expect("matching passwords");
    assert_eq!(nav.calls, ["replace Main"]);
}

#[test]
fn login_replaces_with_main() {
    let mut nav = RecordingNavigator::default();
    let form = LoginForm {
        email: "ada@example.com".into(),
        password: "pw".into(),
    };
    submit_login(&form, &mut nav).expect("stubbed login succeeds");
    assert_eq!(nav.calls, ["replace Main"]);
}

#[test]
fn navigation_stack_push_back_replace() {
    let mut nav = NavigationStack::default();
    assert_eq!(nav.current(), Destination::Login);

    open_register(&mut nav);
    assert_eq!(nav.current(), Destination::Register);
    assert_eq!(nav.depth(), 2);

    return_to_login(&mut nav);
    assert_eq!(nav.current(), Destination::Login);
    assert_eq!(nav.depth(), 1);

    // Back at the root stays put
    nav.back();
    assert_eq!(nav.current(), Destination::Login);

    open_register(&mut nav);
    submit_register(&register_form("pw", "pw"), &mut nav).expect("valid form");
    assert_eq!(nav.current(), Destination::Main);
    // Replace is not reversible
    assert_eq!(nav.depth(), 1);
    nav.back();
    assert_eq!(nav.current(), Destination::Main);
}

#[test]
fn failed_register_leaves_stack_untouched() {
    let mut nav = NavigationStack::default();
    open_register(&mut nav);
    assert!(submit_register(&register_form("abc", "xyz"), &mut nav).is_err());
    assert_eq!(nav.current(), Destination::Register);
    assert_eq!(nav.depth(), 2);
}
