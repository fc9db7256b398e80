//! Console roles and the visibility flags derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConsoleError;

/// Role tag written to the store at sign-in.
///
/// A role only decides which entries the sidebar shows. It is trusted as
/// stored and is not an authorization mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    Content,
    User,
}

impl Role {
    /// All known roles.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Moderator, Role::Content, Role::User];

    /// Stored string form of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::Content => "content",
            Role::User => "user",
        }
    }

    /// Interpret a raw stored value.
    ///
    /// Missing and unrecognized values both yield `None`; neither is an error
    /// for the sidebar, they simply grant no privileged entries.
    pub fn from_stored(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|value| value.parse().ok())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ConsoleError;

    // Exact match: stored values are written verbatim at sign-in.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "moderator" => Ok(Role::Moderator),
            "content" => Ok(Role::Content),
            "user" => Ok(Role::User),
            other => Err(ConsoleError::UnknownRole(other.to_string())),
        }
    }
}

/// Booleans the visibility rule is written in terms of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VisibilityFlags {
    pub is_admin_or_moderator: bool,
    pub is_content_role: bool,
    pub can_view_content: bool,
}

impl VisibilityFlags {
    /// Derive the flags for a (possibly absent) role.
    pub fn for_role(role: Option<Role>) -> Self {
        let is_admin_or_moderator = matches!(role, Some(Role::Admin | Role::Moderator));
        let is_content_role = role == Some(Role::Content);

        Self {
            is_admin_or_moderator,
            is_content_role,
            can_view_content: is_admin_or_moderator || is_content_role,
        }
    }
}
