//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::theme::Branding;

/// Console configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// File backing the persistent role store (default: ./.console-store.json).
    pub store_path: PathBuf,

    /// Where logout navigates to (default: /login).
    pub login_path: String,

    /// Current path when none is given (default: /dashboard).
    pub start_path: String,

    /// Logo shown above the menu (default: /assets/Logo.png).
    pub logo_url: String,

    /// Logo alt text (default: DIPR Admin).
    pub title: String,

    /// Directory with template overrides. When None, built-in templates are used.
    pub template_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let store_path = var("CONSOLE_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./.console-store.json"));

        let login_path = var("CONSOLE_LOGIN_PATH").unwrap_or_else(|| "/login".to_string());
        if !login_path.starts_with('/') {
            bail!("CONSOLE_LOGIN_PATH must start with '/', got {login_path:?}");
        }

        let start_path = var("CONSOLE_START_PATH").unwrap_or_else(|| "/dashboard".to_string());
        if !start_path.starts_with('/') {
            bail!("CONSOLE_START_PATH must start with '/', got {start_path:?}");
        }

        let defaults = Branding::default();
        let logo_url = var("CONSOLE_LOGO_URL").unwrap_or(defaults.logo_url);
        let title = var("CONSOLE_TITLE").unwrap_or(defaults.title);

        let template_dir = var("CONSOLE_TEMPLATE_DIR").map(PathBuf::from);

        Ok(Self {
            store_path,
            login_path,
            start_path,
            logo_url,
            title,
            template_dir,
        })
    }

    pub fn branding(&self) -> Branding {
        Branding {
            logo_url: self.logo_url.clone(),
            title: self.title.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.store_path, PathBuf::from("./.console-store.json"));
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.start_path, "/dashboard");
        assert_eq!(config.branding(), Branding::default());
        assert!(config.template_dir.is_none());
    }

    #[test]
    fn overrides_are_trimmed() {
        let config = load(&[
            ("CONSOLE_LOGIN_PATH", " /signin "),
            ("CONSOLE_TITLE", "Varthe"),
            ("CONSOLE_TEMPLATE_DIR", "/srv/templates"),
        ])
        .unwrap();

        assert_eq!(config.login_path, "/signin");
        assert_eq!(config.title, "Varthe");
        assert_eq!(config.template_dir, Some(PathBuf::from("/srv/templates")));
    }

    #[test]
    fn empty_values_fall_back() {
        let config = load(&[("CONSOLE_START_PATH", "  ")]).unwrap();
        assert_eq!(config.start_path, "/dashboard");
    }

    #[test]
    fn relative_paths_are_rejected() {
        assert!(load(&[("CONSOLE_LOGIN_PATH", "login")]).is_err());
        assert!(load(&[("CONSOLE_START_PATH", "dashboard")]).is_err());
    }
}
