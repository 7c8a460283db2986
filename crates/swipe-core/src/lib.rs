pub mod animator;
pub mod auth;
pub mod classify;
pub mod config;
pub mod constants;
pub mod deck;
pub mod feedback;
pub mod gesture;
pub mod source;
pub mod state;

pub use animator::*;
pub use auth::*;
pub use classify::*;
pub use config::*;
pub use constants::*;
pub use deck::*;
pub use feedback::*;
pub use gesture::*;
pub use source::*;
pub use state::*;
