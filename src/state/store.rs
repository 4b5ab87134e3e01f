//! Session store and reducer
//!
//! All session mutations flow through named actions applied by a pure
//! reducer; the store owns the current snapshot and hands out read-only
//! references.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Session;
use crate::state::screen::Screen;
use crate::utils::errors::{AltaFlowError, Result};
use crate::utils::logging::log_screen_transition;

/// Named session mutations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAction {
    /// Marks the session authenticated and stores the identity verbatim.
    /// There is deliberately no credential check behind this action.
    Login { identity: String },
    Logout,
    ShowAdminPanel,
    HideAdminPanel,
}

impl SessionAction {
    fn name(&self) -> &'static str {
        match self {
            SessionAction::Login { .. } => "LOGIN",
            SessionAction::Logout => "LOGOUT",
            SessionAction::ShowAdminPanel => "SHOW_ADMIN",
            SessionAction::HideAdminPanel => "HIDE_ADMIN",
        }
    }
}

/// Pure reducer from (session, action) to the next session
///
/// Rejects transitions that would create an impossible state, such as a
/// visible admin panel on a logged-out session.
pub fn apply(session: &Session, action: &SessionAction) -> Result<Session> {
    match action {
        SessionAction::Login { identity } => Ok(Session {
            authenticated: true,
            identity: identity.clone(),
            admin_panel_visible: false,
        }),
        SessionAction::Logout => Ok(Session::new()),
        SessionAction::ShowAdminPanel => {
            if !session.authenticated {
                return Err(AltaFlowError::InvalidStateTransition {
                    from: Screen::project(session).to_string(),
                    to: Screen::Admin.to_string(),
                });
            }
            Ok(Session {
                admin_panel_visible: true,
                ..session.clone()
            })
        }
        SessionAction::HideAdminPanel => Ok(Session {
            admin_panel_visible: false,
            ..session.clone()
        }),
    }
}

/// Owner of the current session snapshot
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    current: Session,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            current: Session::new(),
        }
    }

    /// Read-only snapshot of the current session
    pub fn session(&self) -> &Session {
        &self.current
    }

    /// Active screen projected from the current session
    pub fn active_screen(&self) -> Screen {
        Screen::project(&self.current)
    }

    /// Route a mutation through the reducer
    pub fn dispatch(&mut self, action: SessionAction) -> Result<&Session> {
        let from = self.active_screen();
        let next = apply(&self.current, &action)?;
        let to = Screen::project(&next);

        debug!(action = action.name(), from = %from, to = %to, "Session action applied");
        if from != to {
            log_screen_transition(&next.identity, &from.to_string(), &to.to_string());
        }

        self.current = next;
        Ok(&self.current)
    }
}
