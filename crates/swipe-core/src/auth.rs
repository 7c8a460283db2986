//! Stubbed credential screens and the navigation they drive.
//!
//! Nothing here talks to a backend. Submissions are validated locally and,
//! on success, replace the navigation stack with the main destination.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Login,
    Register,
    Main,
}

/// Routing collaborator used by the credential screens.
pub trait Navigator {
    /// Replace the whole stack; the user cannot go back.
    fn replace(&mut self, destination: Destination);
    fn push(&mut self, destination: Destination);
    fn back(&mut self);
}

/// Stack-based navigator starting at the login screen.
#[derive(Clone, Debug)]
pub struct NavigationStack {
    stack: Vec<Destination>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Destination::Login)
    }
}

impl NavigationStack {
    pub fn new(root: Destination) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> Destination {
        // The stack is never empty: `back` keeps the root.
        *self.stack.last().unwrap_or(&Destination::Login)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Navigator for NavigationStack {
    fn replace(&mut self, destination: Destination) {
        log::info!("[nav] replace -> {:?}", destination);
        self.stack.clear();
        self.stack.push(destination);
    }

    fn push(&mut self, destination: Destination) {
        log::info!("[nav] push -> {:?}", destination);
        self.stack.push(destination);
    }

    fn back(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
            log::info!("[nav] back -> {:?}", self.current());
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Stubbed login: always succeeds and enters the main screen.
pub fn submit_login(form: &LoginForm, nav: &mut dyn Navigator) -> Result<(), AuthError> {
    log::info!("[auth] login attempt: {}", form.email);
    nav.replace(Destination::Main);
    Ok(())
}

/// Stubbed registration. A password mismatch is returned to the caller for
/// display and no navigation happens.
pub fn submit_register(form: &RegisterForm, nav: &mut dyn Navigator) -> Result<(), AuthError> {
    if let Err(e) = form.validate() {
        log::warn!("[auth] register rejected: {}", e);
        return Err(e);
    }
    log::info!("[auth] register attempt: {} <{}>", form.name, form.email);
    nav.replace(Destination::Main);
    Ok(())
}

/// "Create account" link on the login screen.
pub fn open_register(nav: &mut dyn Navigator) {
    nav.push(Destination::Register);
}

/// "Sign in" link on the register screen.
pub fn return_to_login(nav: &mut dyn Navigator) {
    nav.back();
}
