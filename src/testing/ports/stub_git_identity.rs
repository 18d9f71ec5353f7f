use std::collections::HashMap;

use crate::ports::GitIdentity;

/// Git identity backed by a fixed key/value map.
#[derive(Debug, Clone, Default)]
pub struct StubGitIdentity {
    values: HashMap<String, String>,
}

impl StubGitIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl GitIdentity for StubGitIdentity {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
