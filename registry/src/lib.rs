//! String-keyed factory registry for the savewire save codec.
//!
//! A [`Registry`] maps a type-identifying string to a factory producing a
//! fresh, exclusively-owned value. It backs string-driven polymorphic
//! construction: a decoder reads a type tag from untrusted input and asks the
//! registry for a matching instance.
//!
//! # Design Principles
//!
//! - **Explicit registration** - Entries are inserted by a deterministic,
//!   reviewable call sequence owned by the process entry point. There is no
//!   global singleton and no link-time registration magic.
//! - **Unknown keys are data, not bugs** - [`Registry::create`] returns
//!   `None` for unregistered keys; callers decide how to recover.
//! - **Read-only after startup** - No locking is provided. Populate the
//!   registry first, then share it immutably.

use std::collections::HashMap;
use std::fmt;

/// A boxed factory producing one owned value per call.
pub type Factory<T> = Box<dyn Fn() -> T + Send + Sync>;

struct Entry<T> {
    key: String,
    factory: Factory<T>,
}

/// Ordered mapping from string key to factory.
///
/// Keys are unique. Re-registering a key replaces its factory in place:
/// last registration wins, the key keeps its original enumeration position,
/// and [`Registry::keys`] reports it exactly once. Duplicate registration is
/// documented, intentional behavior rather than an error.
pub struct Registry<T> {
    entries: Vec<Entry<T>>,
    index: HashMap<String, usize>,
}

impl<T> Registry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registers `factory` under `key`, overwriting any existing entry.
    pub fn register<F>(&mut self, key: impl Into<String>, factory: F)
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        let key = key.into();
        match self.index.get(&key) {
            Some(&slot) => {
                self.entries[slot].factory = Box::new(factory);
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(Entry {
                    key,
                    factory: Box::new(factory),
                });
            }
        }
    }

    /// Creates a fresh value for `key`.
    ///
    /// Returns `None` when `key` has no registered factory. Callers must
    /// treat this as expected, recoverable input: type tags usually come
    /// from deserialized data.
    #[must_use]
    pub fn create(&self, key: &str) -> Option<T> {
        self.index
            .get(key)
            .map(|&slot| (self.entries[slot].factory)())
    }

    /// Returns `true` if `key` has a registered factory.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Enumerates registered keys in first-insertion order.
    ///
    /// For diagnostics and listing; lookup correctness never depends on
    /// enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Returns the number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no keys are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}
