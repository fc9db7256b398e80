//! Role-conditional navigation sidebar.
//!
//! [`RoleNavMenu`] ties the menu catalog to its three collaborators: it reads
//! the role from a [`RoleStore`], the current path from a [`Router`], and uses
//! a [`ConfirmDialog`] for the logout prompt. It holds no state of its own
//! between renders.

use tracing::{debug, info};

use crate::dialog::{ConfirmDialog, ConfirmOptions, Decision};
use crate::error::ConsoleResult;
use crate::menu::{LOGOUT_KEY, MenuView};
use crate::role::Role;
use crate::router::Router;
use crate::store::{ROLE_KEY, RoleStore, TOKEN_KEY};

/// Default navigation target after logout.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// What a menu click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Navigated,
    /// The logout entry; its own button drives the logout flow.
    Ignored,
}

/// How a logout prompt was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    SignedOut,
    Cancelled,
}

/// An open logout prompt awaiting the user's decision.
///
/// Only [`RoleNavMenu::on_logout_click`] creates one, and it is consumed by
/// confirming or cancelling, so a prompt cannot be resolved twice.
#[derive(Debug)]
#[must_use = "an open logout prompt must be confirmed or cancelled"]
pub struct PendingLogout {
    options: ConfirmOptions,
}

impl PendingLogout {
    /// The prompt that was shown.
    pub fn options(&self) -> &ConfirmOptions {
        &self.options
    }
}

/// The sidebar component.
#[derive(Debug)]
pub struct RoleNavMenu<S, R> {
    store: S,
    router: R,
    login_path: String,
}

impl<S: RoleStore, R: Router> RoleNavMenu<S, R> {
    pub fn new(store: S, router: R) -> Self {
        Self {
            store,
            router,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }

    /// Override where logout navigates to.
    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Compute the menu for the stored role and the router's current path.
    pub fn render(&self) -> ConsoleResult<MenuView> {
        let stored = self.store.get(ROLE_KEY)?;
        let role = Role::from_stored(stored.as_deref());
        if let (Some(value), None) = (&stored, role) {
            debug!(value = %value, "unrecognized role, showing public entries only");
        }

        let current_path = self.router.current_path();
        let view = MenuView::build(role, &current_path);

        debug!(
            role = role.map(Role::as_str).unwrap_or("none"),
            path = %current_path,
            entries = view.entries.len(),
            "sidebar rendered"
        );
        Ok(view)
    }

    /// Handle a click on a menu entry.
    ///
    /// Every key except the logout entry's is handed to the router as-is.
    pub fn on_menu_click(&mut self, key: &str) -> ConsoleResult<ClickOutcome> {
        if key == LOGOUT_KEY {
            return Ok(ClickOutcome::Ignored);
        }

        info!(path = %key, "navigating");
        self.router.navigate(key)?;
        Ok(ClickOutcome::Navigated)
    }

    /// Open the logout confirmation. Nothing changes until it is resolved.
    pub fn on_logout_click<D: ConfirmDialog + ?Sized>(
        &self,
        dialog: &mut D,
    ) -> ConsoleResult<PendingLogout> {
        let options = ConfirmOptions::logout();
        dialog.open(&options)?;
        debug!("logout confirmation opened");
        Ok(PendingLogout { options })
    }

    /// Sign out: drop the token, then the role, then go to the login page.
    ///
    /// Navigation is only issued once both removals have succeeded, so the
    /// login page never sees a stale session.
    pub fn confirm_logout(&mut self, _pending: PendingLogout) -> ConsoleResult<()> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(ROLE_KEY)?;
        self.router.navigate(&self.login_path)?;

        info!(path = %self.login_path, "signed out");
        Ok(())
    }

    /// Dismiss the logout prompt without touching the store or the router.
    pub fn cancel_logout(&self, _pending: PendingLogout) {
        debug!("logout cancelled");
    }

    /// Resolve a pending logout with the user's decision.
    pub fn resolve_logout(
        &mut self,
        pending: PendingLogout,
        decision: Decision,
    ) -> ConsoleResult<LogoutOutcome> {
        match decision {
            Decision::Confirm => {
                self.confirm_logout(pending)?;
                Ok(LogoutOutcome::SignedOut)
            }
            Decision::Cancel => {
                self.cancel_logout(pending);
                Ok(LogoutOutcome::Cancelled)
            }
        }
    }
}
