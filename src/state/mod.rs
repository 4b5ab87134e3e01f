//! State management module
//!
//! This module holds the session reducer, the session store and the
//! screen projection that together form the navigation state machine.

pub mod screen;
pub mod store;

// Re-export commonly used state components
pub use screen::Screen;
pub use store::{apply, SessionAction, SessionStore};
