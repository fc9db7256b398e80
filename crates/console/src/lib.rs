//! DIPR admin console navigation.
//!
//! Role-conditional sidebar for the admin console: the stored role decides
//! which entries are shown, clicks are routed, and logout goes through a
//! confirmation prompt. The `dipr-console` binary drives it from a terminal.

pub mod config;
pub mod dialog;
pub mod error;
pub mod menu;
pub mod role;
pub mod router;
pub mod sidebar;
pub mod store;
pub mod theme;

pub use config::Config;
pub use dialog::{ConfirmDialog, ConfirmOptions, Decision, OkType, TerminalDialog};
pub use error::{ConsoleError, ConsoleResult};
pub use menu::{MenuEntry, MenuView, VisibleEntry, visible_entries};
pub use role::{Role, VisibilityFlags};
pub use router::{MemoryRouter, Router};
pub use sidebar::{ClickOutcome, LogoutOutcome, PendingLogout, RoleNavMenu};
pub use store::{FileRoleStore, MemoryRoleStore, RoleStore, sign_in};
pub use theme::{Branding, SidebarTheme};
