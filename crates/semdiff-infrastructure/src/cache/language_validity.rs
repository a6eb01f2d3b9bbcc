//! Language-Validity Cache
//!
//! Process-wide, append-only cache mapping language codes to a validity
//! verdict. Entries are written at most once per key via atomic
//! insert-if-absent; subsequent reads are pure lookups. The cache is an
//! explicit object owned by the service layer and passed by reference to
//! whatever component performs language validation - not a module-level
//! singleton.

use dashmap::DashMap;

/// Append-only map of language code to validity verdict
#[derive(Default)]
pub struct LanguageValidityCache {
    entries: DashMap<String, bool>,
}

impl LanguageValidityCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Return the cached verdict, computing and storing it on first access
    ///
    /// The closure runs at most once per key; once a verdict is stored it
    /// is never overwritten.
    pub fn check_or_insert_with<F>(&self, language_code: &str, verdict: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        *self
            .entries
            .entry(language_code.to_string())
            .or_insert_with(verdict)
    }

    /// Look up a cached verdict without inserting
    pub fn get(&self, language_code: &str) -> Option<bool> {
        self.entries.get(language_code).map(|entry| *entry)
    }

    /// Number of cached verdicts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
