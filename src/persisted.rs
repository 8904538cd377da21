// SPDX-License-Identifier: MPL-2.0
//! Typed values that write themselves back to a store on every change.
//!
//! A [`Persisted<T>`] binds one value to one key in a [`Store`]. On open it
//! hydrates from the stored JSON string (or the caller's default when the
//! slot is empty); afterwards every [`set`](Persisted::set) or
//! [`update`](Persisted::update) serializes the full current value, writes
//! it back under the key, and synchronously notifies registered observers
//! with the new value.
//!
//! # Hydration
//!
//! A stored string that fails to parse as `T` is ignored: the value starts
//! from the caller's default and [`open`](Persisted::open) reports a
//! [`LoadWarning`] so the application can surface it (for example as an
//! error toast). The malformed slot is left untouched until the next
//! mutation overwrites it.
//!
//! # Examples
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use statekit::{storage, MemoryStore, Persisted};
//!
//! #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
//! struct Layout {
//!     sidebar_width: u32,
//! }
//!
//! let store = storage::shared(MemoryStore::new());
//! let (mut layout, warning) = Persisted::open(store, "layout", Layout::default());
//! assert!(warning.is_none());
//!
//! layout.update(|l| l.sidebar_width = 240).expect("write through");
//! assert_eq!(layout.value().sidebar_width, 240);
//! ```

use crate::error::Result;
use crate::storage::StoreHandle;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Change observer invoked with the full new value after each write-through.
type Observer<T> = Box<dyn FnMut(&T)>;

/// Why a stored entry was ignored during [`Persisted::open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The slot held a string that did not parse as the expected type.
    /// Carries the parser's error message.
    Malformed(String),
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::Malformed(detail) => {
                write!(f, "stored value is malformed: {}", detail)
            }
        }
    }
}

/// A value bound to a store slot, written back on every mutation.
pub struct Persisted<T> {
    key: String,
    store: StoreHandle,
    value: T,
    observers: Vec<Observer<T>>,
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Opens the value stored under `key`, falling back to `default`.
    ///
    /// A missing slot is not an error; the value simply starts from
    /// `default`. A malformed slot also starts from `default` but is
    /// reported through the returned [`LoadWarning`].
    pub fn open(
        store: StoreHandle,
        key: impl Into<String>,
        default: T,
    ) -> (Self, Option<LoadWarning>) {
        let key = key.into();
        let stored = store.borrow().get(&key);

        let (value, warning) = match stored {
            None => (default, None),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => (value, None),
                Err(err) => {
                    log::warn!("ignoring malformed entry for key {key:?}: {err}");
                    (default, Some(LoadWarning::Malformed(err.to_string())))
                }
            },
        };

        (
            Self {
                key,
                store,
                value,
                observers: Vec::new(),
            },
            warning,
        )
    }

    /// Returns the key this value is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the current in-memory value.
    ///
    /// This always reflects the most recent `set`/`update`, even if the
    /// write-through for it failed.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the value, writes it through, and notifies observers.
    ///
    /// On a write failure the error propagates to the caller; the in-memory
    /// value keeps the new state and observers are not notified.
    pub fn set(&mut self, value: T) -> Result<()> {
        self.value = value;
        self.write_through()?;
        self.notify();
        Ok(())
    }

    /// Mutates the value in place, writes it through, and notifies observers.
    ///
    /// This is the entry point for nested mutation: the closure may change
    /// any part of the value, and the full new state is serialized
    /// afterwards.
    pub fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.value);
        self.write_through()?;
        self.notify();
        Ok(())
    }

    /// Registers a change observer.
    ///
    /// Observers run synchronously after every successful write-through, in
    /// registration order, and receive the full new value. They are never
    /// called for the state the value was opened with.
    pub fn subscribe(&mut self, observer: impl FnMut(&T) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Serializes the current value and writes it to the store slot.
    fn write_through(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.value)?;
        self.store.borrow_mut().set(&self.key, &raw)
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer(&self.value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Persisted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persisted")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
