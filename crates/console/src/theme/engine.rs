//! Theme engine for the sidebar template.

use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use crate::dialog::ConfirmOptions;
use crate::error::{ConsoleError, ConsoleResult};
use crate::menu::{LOGOUT_KEY, MenuView};

/// Name the sidebar template is registered under.
pub const SIDEBAR_TEMPLATE: &str = "sidebar.html";

const BUILTIN_SIDEBAR: &str = include_str!("../../templates/sidebar.html");

/// Logo shown above the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branding {
    pub logo_url: String,
    /// Alt text of the logo.
    pub title: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            logo_url: "/assets/Logo.png".to_string(),
            title: "DIPR Admin".to_string(),
        }
    }
}

/// Renders the sidebar to HTML.
pub struct SidebarTheme {
    tera: Tera,
}

impl SidebarTheme {
    /// Create a theme using the built-in template.
    pub fn new() -> ConsoleResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(SIDEBAR_TEMPLATE, BUILTIN_SIDEBAR)?;
        Ok(Self { tera })
    }

    /// Create a theme from a template directory.
    ///
    /// Any `*.html` under the directory is loaded; a `sidebar.html` there
    /// replaces the built-in one, otherwise the built-in template is kept.
    pub fn from_dir(template_dir: &Path) -> ConsoleResult<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern.to_str().ok_or_else(|| {
            ConsoleError::Template(tera::Error::msg(format!(
                "invalid template directory path: {}",
                template_dir.display()
            )))
        })?;

        let mut tera = Tera::new(pattern_str)?;
        if tera.get_template(SIDEBAR_TEMPLATE).is_err() {
            tera.add_raw_template(SIDEBAR_TEMPLATE, BUILTIN_SIDEBAR)?;
        }

        debug!(
            count = tera.get_template_names().count(),
            dir = %template_dir.display(),
            "loaded templates"
        );
        Ok(Self { tera })
    }

    /// Render the sidebar for a computed view.
    pub fn render(&self, view: &MenuView, branding: &Branding) -> ConsoleResult<String> {
        let mut context = Context::new();
        context.insert("menu", view);
        context.insert("branding", branding);
        context.insert("confirm", &ConfirmOptions::logout());
        context.insert("logout_key", LOGOUT_KEY);

        Ok(self.tera.render(SIDEBAR_TEMPLATE, &context)?)
    }
}
