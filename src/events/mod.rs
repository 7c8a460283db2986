pub mod forms;
pub mod pointer;

pub use forms::wire_auth_forms;
pub use pointer::{wire_input_handlers, wire_visibility_abort, InputWiring};
