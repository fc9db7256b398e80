//! Sidebar menu definitions and visibility.
//!
//! The catalog is static; visibility is derived per render from the role:
//! - Dashboard, Users, Moderation: admins and moderators
//! - Content management entries: admins, moderators and content editors
//! - Logout: everyone

mod catalog;
mod visibility;

pub use catalog::{Audience, Icon, LOGOUT_KEY, MenuEntry, catalog, find};
pub use visibility::{MenuView, VisibleEntry, visible_entries};
