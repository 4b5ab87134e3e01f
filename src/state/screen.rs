//! Screen projection
//!
//! The portal is a three-state machine; the active screen is a pure
//! function of the session.

use serde::{Deserialize, Serialize};

use crate::models::Session;

/// The three screens of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Login,
    Registration,
    Admin,
}

impl Screen {
    /// Project the active screen from a session snapshot
    pub fn project(session: &Session) -> Screen {
        if !session.authenticated {
            Screen::Login
        } else if session.admin_panel_visible {
            Screen::Admin
        } else {
            Screen::Registration
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Login => write!(f, "login"),
            Screen::Registration => write!(f, "registration"),
            Screen::Admin => write!(f, "admin"),
        }
    }
}
