//! Sidebar HTML rendering.
//!
//! Provides Tera-based rendering of a [`MenuView`](crate::menu::MenuView)
//! with the console logo above the menu.

mod engine;

pub use engine::{Branding, SIDEBAR_TEMPLATE, SidebarTheme};
