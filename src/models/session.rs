//! Session model

use serde::{Deserialize, Serialize};

/// In-memory session of the portal
///
/// Invariant: `admin_panel_visible` is only ever true while
/// `authenticated` is true. All mutations go through the reducer in
/// [`crate::state`], which upholds this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    /// Email entered at login, stored verbatim; doubles as the
    /// authorization key for admin access
    pub identity: String,
    pub admin_panel_visible: bool,
}

impl Session {
    /// Fresh logged-out session, as created at application start
    pub fn new() -> Self {
        Self {
            authenticated: false,
            identity: String::new(),
            admin_panel_visible: false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
