//! Router port and an in-memory history router.

use tracing::debug;

use crate::error::{ConsoleError, ConsoleResult};

/// Source of the current path and sink for navigation requests.
pub trait Router {
    fn current_path(&self) -> String;

    fn navigate(&mut self, path: &str) -> ConsoleResult<()>;
}

impl<R: Router + ?Sized> Router for &mut R {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn navigate(&mut self, path: &str) -> ConsoleResult<()> {
        (**self).navigate(path)
    }
}

/// Router keeping the current path and every path navigated away from.
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    current: String,
    history: Vec<String>,
}

impl MemoryRouter {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            current: start.into(),
            history: Vec::new(),
        }
    }

    /// Paths visited before the current one, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Router for MemoryRouter {
    fn current_path(&self) -> String {
        self.current.clone()
    }

    fn navigate(&mut self, path: &str) -> ConsoleResult<()> {
        if !path.starts_with('/') {
            return Err(ConsoleError::Navigation {
                path: path.to_string(),
                reason: "path must be absolute".to_string(),
            });
        }

        debug!(from = %self.current, to = %path, "route change");
        let previous = std::mem::replace(&mut self.current, path.to_string());
        self.history.push(previous);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn navigate_updates_current_and_history() {
        let mut router = MemoryRouter::new("/dashboard");
        router.navigate("/manage-users").unwrap();
        router.navigate("/manage-users").unwrap();

        assert_eq!(router.current_path(), "/manage-users");
        assert_eq!(router.history(), ["/dashboard", "/manage-users"]);
    }

    #[test]
    fn relative_path_is_rejected() {
        let mut router = MemoryRouter::new("/dashboard");
        let err = router.navigate("login").unwrap_err();

        assert!(matches!(err, ConsoleError::Navigation { ref path, .. } if path == "login"));
        assert_eq!(router.current_path(), "/dashboard");
        assert!(router.history().is_empty());
    }
}
