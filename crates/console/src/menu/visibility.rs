//! Role-based filtering of the catalog into the rendered menu.

use serde::Serialize;

use crate::role::{Role, VisibilityFlags};

use super::catalog::{MenuEntry, catalog};

/// An entry that survived filtering, with its selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleEntry {
    #[serde(flatten)]
    pub entry: MenuEntry,
    pub selected: bool,
}

/// The sidebar as it should be drawn for one `(role, path)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub role: Option<Role>,
    pub current_path: String,
    pub entries: Vec<VisibleEntry>,
}

impl MenuView {
    /// Build the view for a role and current path.
    pub fn build(role: Option<Role>, current_path: &str) -> Self {
        Self {
            role,
            current_path: current_path.to_string(),
            entries: visible_entries(role, current_path),
        }
    }

    /// Keys of the visible entries, in display order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.entry.key).collect()
    }

    /// The highlighted entry, if the current path matches one.
    pub fn selected(&self) -> Option<&VisibleEntry> {
        self.entries.iter().find(|e| e.selected)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.entry.key == key)
    }
}

/// Filter the catalog for `role` and mark the entry matching `current_path`.
///
/// Pure: the result depends on nothing but the two arguments. Selection is
/// exact key equality, so `/manage-users/42` selects nothing.
pub fn visible_entries(role: Option<Role>, current_path: &str) -> Vec<VisibleEntry> {
    let flags = VisibilityFlags::for_role(role);

    catalog()
        .iter()
        .filter(|entry| entry.audience.admits(flags))
        .map(|entry| VisibleEntry {
            entry: *entry,
            selected: entry.key == current_path,
        })
        .collect()
}
