//! Role store port and its in-memory and file-backed implementations.
//!
//! The store plays the part of the browser's persistent storage: sign-in
//! writes `token` and `role`, the sidebar reads `role` on every render and
//! clears both on logout.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::ConsoleResult;
use crate::role::Role;

/// Store key holding the signed-in role.
pub const ROLE_KEY: &str = "role";

/// Store key holding the session token.
pub const TOKEN_KEY: &str = "token";

/// Key-value storage the sidebar reads the role from.
pub trait RoleStore {
    fn get(&self, key: &str) -> ConsoleResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> ConsoleResult<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> ConsoleResult<()>;
}

impl<S: RoleStore + ?Sized> RoleStore for &mut S {
    fn get(&self, key: &str) -> ConsoleResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> ConsoleResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> ConsoleResult<()> {
        (**self).remove(key)
    }
}

/// Write the session written at login: token first, then role.
pub fn sign_in<S: RoleStore + ?Sized>(store: &mut S, role: Role, token: &str) -> ConsoleResult<()> {
    store.set(TOKEN_KEY, token)?;
    store.set(ROLE_KEY, role.as_str())?;
    debug!(%role, "session stored");
    Ok(())
}

/// Process-wide in-memory store.
///
/// Clones share the same map, so every holder observes the same session.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoleStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Store a value. Unlike [`RoleStore::set`] this cannot fail.
    pub fn insert(&self, key: &str, value: &str) {
        self.inner.write().insert(key.to_string(), value.to_string());
    }
}

impl RoleStore for MemoryRoleStore {
    fn get(&self, key: &str) -> ConsoleResult<Option<String>> {
        Ok(self.inner.read().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ConsoleResult<()> {
        self.insert(key, value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> ConsoleResult<()> {
        self.inner.write().remove(key);
        Ok(())
    }
}

/// Store persisted as a JSON object on disk, surviving restarts.
///
/// Every read goes to disk so changes made by another process are observed
/// on the next render. Writes replace the file atomically.
#[derive(Debug, Clone)]
pub struct FileRoleStore {
    path: PathBuf,
}

impl FileRoleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> ConsoleResult<BTreeMap<String, String>> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> ConsoleResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl RoleStore for FileRoleStore {
    fn get(&self, key: &str) -> ConsoleResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> ConsoleResult<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> ConsoleResult<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::ConsoleError;

    fn temp_store_path() -> PathBuf {
        std::env::temp_dir().join(format!("dipr-store-{}.json", uuid::Uuid::now_v7()))
    }

    #[test]
    fn memory_store_clones_share_state() {
        let mut store = MemoryRoleStore::new();
        let view = store.clone();

        store.set(ROLE_KEY, "admin").unwrap();
        assert_eq!(view.get(ROLE_KEY).unwrap().as_deref(), Some("admin"));

        store.remove(ROLE_KEY).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn memory_store_insert_is_shared() {
        let store = MemoryRoleStore::new();
        store.clone().insert(ROLE_KEY, "content");
        assert_eq!(store.get(ROLE_KEY).unwrap().as_deref(), Some("content"));
    }

    #[test]
    fn memory_store_remove_missing_is_ok() {
        let mut store = MemoryRoleStore::new();
        store.remove(TOKEN_KEY).unwrap();
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn sign_in_writes_both_keys() {
        let mut store = MemoryRoleStore::new();
        sign_in(&mut store, Role::Content, "abc").unwrap();

        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
        assert_eq!(store.get(ROLE_KEY).unwrap().as_deref(), Some("content"));
    }

    #[test]
    fn file_store_missing_file_reads_empty() {
        let store = FileRoleStore::new(temp_store_path());
        assert_eq!(store.get(ROLE_KEY).unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let path = temp_store_path();

        let mut first = FileRoleStore::new(&path);
        first.set(ROLE_KEY, "moderator").unwrap();
        first.set(TOKEN_KEY, "t-1").unwrap();

        let mut second = FileRoleStore::new(&path);
        assert_eq!(second.get(ROLE_KEY).unwrap().as_deref(), Some("moderator"));

        second.remove(TOKEN_KEY).unwrap();
        assert_eq!(first.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(first.get(ROLE_KEY).unwrap().as_deref(), Some("moderator"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn file_store_rejects_corrupt_file() {
        let path = temp_store_path();
        fs::write(&path, "not json").unwrap();

        let store = FileRoleStore::new(&path);
        assert!(matches!(store.get(ROLE_KEY), Err(ConsoleError::StoreFormat(_))));

        fs::remove_file(&path).unwrap();
    }
}
