//! Authenticated sender tracking.

use std::collections::HashSet;

/// Sender numerics currently allowed to issue privileged bot commands.
///
/// Scoped to one link session: filled by AUTH, pruned by KILL and QUIT,
/// and dropped with the connection.
#[derive(Debug, Default)]
pub struct AuthStore {
    authed: HashSet<String>,
}

impl AuthStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `numeric` is authenticated.
    pub fn contains(&self, numeric: &str) -> bool {
        self.authed.contains(numeric)
    }

    /// Mark `numeric` authenticated. Returns `false` if it already was.
    pub fn insert(&mut self, numeric: impl Into<String>) -> bool {
        self.authed.insert(numeric.into())
    }

    /// Forget `numeric`. Returns `false` if it was not present.
    pub fn remove(&mut self, numeric: &str) -> bool {
        self.authed.remove(numeric)
    }

    /// Number of authenticated senders.
    pub fn len(&self) -> usize {
        self.authed.len()
    }

    /// Whether nobody is authenticated.
    pub fn is_empty(&self) -> bool {
        self.authed.is_empty()
    }
}
