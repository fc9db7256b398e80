//! dipr-console test utilities.
//!
//! Recording fakes for the sidebar's collaborators. The store, router and
//! dialog fakes write into one shared [`CallLog`], so tests can assert both
//! which calls happened and in what order.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use dipr_console::{
    ConfirmDialog, ConfirmOptions, ConsoleError, ConsoleResult, MemoryRoleStore, RoleNavMenu,
    RoleStore, Router,
};
use dipr_console::store::{ROLE_KEY, TOKEN_KEY};

/// A single collaborator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    StoreGet(String),
    StoreSet(String, String),
    StoreRemove(String),
    CurrentPath,
    Navigate(String),
    DialogOpen(ConfirmOptions),
}

impl Call {
    pub fn is_store(&self) -> bool {
        matches!(self, Call::StoreGet(_) | Call::StoreSet(..) | Call::StoreRemove(_))
    }

    pub fn is_router(&self) -> bool {
        matches!(self, Call::CurrentPath | Call::Navigate(_))
    }

    /// Calls that change state somewhere.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Call::StoreSet(..) | Call::StoreRemove(_) | Call::Navigate(_))
    }
}

/// Ordered log shared by all fakes of one test.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    /// Snapshot of all calls so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn store_mutations(&self) -> Vec<Call> {
        self.mutations().into_iter().filter(Call::is_store).collect()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Navigate(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

/// Role store that records every call and can be told to fail removals.
#[derive(Debug, Clone)]
pub struct RecordingStore {
    log: CallLog,
    inner: MemoryRoleStore,
    fail_remove: Option<String>,
}

impl RecordingStore {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            inner: MemoryRoleStore::new(),
            fail_remove: None,
        }
    }

    /// Seed a value without recording it.
    pub fn with(self, key: &str, value: &str) -> Self {
        self.inner.insert(key, value);
        self
    }

    /// Make `remove(key)` fail with an I/O error.
    pub fn failing_remove(mut self, key: &str) -> Self {
        self.fail_remove = Some(key.to_string());
        self
    }

    /// Read a value without recording it.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.get(key).ok().flatten()
    }
}

impl RoleStore for RecordingStore {
    fn get(&self, key: &str) -> ConsoleResult<Option<String>> {
        self.log.record(Call::StoreGet(key.to_string()));
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> ConsoleResult<()> {
        self.log.record(Call::StoreSet(key.to_string(), value.to_string()));
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> ConsoleResult<()> {
        self.log.record(Call::StoreRemove(key.to_string()));
        if self.fail_remove.as_deref() == Some(key) {
            return Err(ConsoleError::StoreIo(io::Error::other("storage unavailable")));
        }
        self.inner.remove(key)
    }
}

/// Router that records every call.
#[derive(Debug, Clone)]
pub struct RecordingRouter {
    log: CallLog,
    current: String,
}

impl RecordingRouter {
    pub fn new(log: CallLog, current: &str) -> Self {
        Self {
            log,
            current: current.to_string(),
        }
    }

    /// Current path, without recording a call.
    pub fn peek(&self) -> &str {
        &self.current
    }
}

impl Router for RecordingRouter {
    fn current_path(&self) -> String {
        self.log.record(Call::CurrentPath);
        self.current.clone()
    }

    fn navigate(&mut self, path: &str) -> ConsoleResult<()> {
        self.log.record(Call::Navigate(path.to_string()));
        self.current = path.to_string();
        Ok(())
    }
}

/// Dialog that records the prompts it was asked to show.
#[derive(Debug, Clone)]
pub struct RecordingDialog {
    log: CallLog,
}

impl RecordingDialog {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl ConfirmDialog for RecordingDialog {
    fn open(&mut self, options: &ConfirmOptions) -> ConsoleResult<()> {
        self.log.record(Call::DialogOpen(options.clone()));
        Ok(())
    }
}

/// Everything a sidebar test needs, wired to one log.
pub struct Harness {
    pub log: CallLog,
    pub menu: RoleNavMenu<RecordingStore, RecordingRouter>,
    pub dialog: RecordingDialog,
}

/// Build a sidebar with a stored role (or none) at the given path.
///
/// A token is stored alongside any role, as sign-in would.
pub fn harness(role: Option<&str>, path: &str) -> Harness {
    harness_with(role, path, |store| store)
}

/// Like [`harness`], with a hook to adjust the store.
pub fn harness_with(
    role: Option<&str>,
    path: &str,
    adjust: impl FnOnce(RecordingStore) -> RecordingStore,
) -> Harness {
    let log = CallLog::new();

    let mut store = RecordingStore::new(log.clone());
    if let Some(role) = role {
        store = store.with(TOKEN_KEY, "test-token").with(ROLE_KEY, role);
    }

    let menu = RoleNavMenu::new(adjust(store), RecordingRouter::new(log.clone(), path));
    let dialog = RecordingDialog::new(log.clone());

    Harness { log, menu, dialog }
}

/// Assertion helpers for rendered output.
pub mod assert {
    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that `first` occurs in `haystack` before `second`.
    pub fn ordered(haystack: &str, first: &str, second: &str) {
        match (haystack.find(first), haystack.find(second)) {
            (Some(a), Some(b)) => assert!(
                a < b,
                "Expected '{first}' before '{second}'\nActual: {haystack}"
            ),
            _ => panic!("Expected both '{first}' and '{second}'\nActual: {haystack}"),
        }
    }

    /// Assert two JSON values are equal, printing both on mismatch.
    pub fn json_eq(actual: &serde_json::Value, expected: &serde_json::Value) {
        assert_eq!(actual, expected, "JSON mismatch:\nactual: {actual:#}\nexpected: {expected:#}");
    }
}
