// SPDX-License-Identifier: MPL-2.0
//! String key/value stores backing persisted values.
//!
//! A [`Store`] is a flat namespace of string slots. [`Persisted`] values
//! serialize themselves into one slot each and write it back on every
//! mutation. Two implementations are provided:
//!
//! - [`MemoryStore`] - in-process map, for tests and ephemeral state
//! - [`FileStore`] - one file per key under a directory, for state that
//!   survives restarts
//!
//! Stores are shared between components through a [`StoreHandle`]
//! (`Rc<RefCell<dyn Store>>`): the library targets single-threaded UI loops,
//! so no locking is involved. Independent handles writing the same key are
//! not coordinated; the last write wins.
//!
//! [`Persisted`]: crate::persisted::Persisted

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// A synchronous string key/value store.
///
/// Reads of a missing key yield `None`; that is never an error. Writes may
/// fail depending on the backend (I/O, permissions) and surface as
/// [`Error::Storage`](crate::error::Error::Storage).
pub trait Store {
    /// Returns the raw stored string for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, overwriting any previous content.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Shared single-threaded handle to a store.
pub type StoreHandle = Rc<RefCell<dyn Store>>;

/// Wraps a store in a [`StoreHandle`] for sharing between persisted values.
pub fn shared<S: Store + 'static>(store: S) -> StoreHandle {
    Rc::new(RefCell::new(store))
}
