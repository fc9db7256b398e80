//! Static sidebar entry catalog.

use serde::Serialize;

use crate::role::VisibilityFlags;

/// Key of the logout entry.
///
/// The logout entry shares the menu with the routed entries but is never
/// navigated to directly; its click opens the logout confirmation instead.
pub const LOGOUT_KEY: &str = "login";

/// Symbolic icon ids. Drawing them is left to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    UserGroup,
    File,
    Book,
    VideoCamera,
    VideoCameraAdd,
}

impl Icon {
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::UserGroup => "user-group",
            Icon::File => "file",
            Icon::Book => "book",
            Icon::VideoCamera => "video-camera",
            Icon::VideoCameraAdd => "video-camera-add",
        }
    }
}

/// Who gets to see an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    /// Admins and moderators.
    AdminOrModerator,
    /// Anyone allowed to manage content (admin, moderator, content).
    ContentViewers,
    /// Every visitor, signed in or not.
    Everyone,
}

impl Audience {
    /// Whether an entry with this audience is shown under the given flags.
    pub fn admits(self, flags: VisibilityFlags) -> bool {
        match self {
            Audience::AdminOrModerator => flags.is_admin_or_moderator,
            Audience::ContentViewers => flags.can_view_content,
            Audience::Everyone => true,
        }
    }
}

/// A single sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Route path, or [`LOGOUT_KEY`] for the logout entry.
    pub key: &'static str,
    /// Label shown in the sidebar.
    pub label: &'static str,
    /// Icon id; the logout entry has none.
    pub icon: Option<Icon>,
    pub audience: Audience,
}

impl MenuEntry {
    const fn routed(
        key: &'static str,
        label: &'static str,
        icon: Icon,
        audience: Audience,
    ) -> Self {
        Self {
            key,
            label,
            icon: Some(icon),
            audience,
        }
    }

    pub fn is_logout(&self) -> bool {
        self.key == LOGOUT_KEY
    }
}

/// Every entry in display order.
static CATALOG: [MenuEntry; 11] = [
    MenuEntry::routed("/dashboard", "Dashboard", Icon::Home, Audience::AdminOrModerator),
    MenuEntry::routed("/manage-users", "Users", Icon::UserGroup, Audience::AdminOrModerator),
    MenuEntry::routed("/manage-articles", "Articles", Icon::File, Audience::ContentViewers),
    MenuEntry::routed(
        "/manage-magazines1",
        "March of Karnataka",
        Icon::Book,
        Audience::ContentViewers,
    ),
    MenuEntry::routed(
        "/manage-magazines2",
        "Vartha Janapada",
        Icon::Book,
        Audience::ContentViewers,
    ),
    MenuEntry::routed("/manage-banners", "Banners", Icon::Book, Audience::ContentViewers),
    MenuEntry::routed(
        "/manage-shortvideos",
        "Short Videos",
        Icon::VideoCamera,
        Audience::ContentViewers,
    ),
    MenuEntry::routed(
        "/manage-longvideo",
        "Long Videos",
        Icon::VideoCameraAdd,
        Audience::ContentViewers,
    ),
    MenuEntry::routed(
        "/manage-notifications",
        "Notifications",
        Icon::VideoCameraAdd,
        Audience::ContentViewers,
    ),
    MenuEntry::routed(
        "/manage-moderation",
        "Moderation",
        Icon::VideoCameraAdd,
        Audience::AdminOrModerator,
    ),
    MenuEntry {
        key: LOGOUT_KEY,
        label: "Logout",
        icon: None,
        audience: Audience::Everyone,
    },
];

/// All entries in display order, before visibility filtering.
pub fn catalog() -> &'static [MenuEntry] {
    &CATALOG
}

/// Look up an entry by key.
pub fn find(key: &str) -> Option<&'static MenuEntry> {
    CATALOG.iter().find(|entry| entry.key == key)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<_> = catalog().iter().map(|e| e.key).collect();
        assert_eq!(keys.len(), catalog().len());
    }

    #[test]
    fn logout_is_last_and_public() {
        let last = catalog().last().unwrap();
        assert!(last.is_logout());
        assert_eq!(last.audience, Audience::Everyone);
        assert!(last.icon.is_none());
    }

    #[test]
    fn routed_entries_are_paths() {
        for entry in catalog().iter().filter(|e| !e.is_logout()) {
            assert!(entry.key.starts_with('/'), "{} is not a path", entry.key);
            assert!(entry.icon.is_some());
        }
    }

    #[test]
    fn find_by_key() {
        assert_eq!(find("/manage-banners").unwrap().label, "Banners");
        assert!(find("/manage-category").is_none());
    }

    #[test]
    fn audience_admits() {
        let none = VisibilityFlags::default();
        assert!(Audience::Everyone.admits(none));
        assert!(!Audience::ContentViewers.admits(none));
        assert!(!Audience::AdminOrModerator.admits(none));
    }
}
