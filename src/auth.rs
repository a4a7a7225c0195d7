//! Bearer-token model and its persisted lifecycle.

pub mod secret;
pub mod state;

pub use secret::*;
pub use state::*;
