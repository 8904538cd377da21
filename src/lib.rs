// SPDX-License-Identifier: MPL-2.0
//! `statekit` provides two small, renderer-agnostic building blocks for GUI
//! application state:
//!
//! - [`Persisted<T>`] - a typed value bound to a slot in a string key/value
//!   [`Store`]; every mutation writes the JSON-serialized value back and
//!   synchronously notifies change observers.
//! - [`ToastRegistry`] - an owned, ordered list of transient notification
//!   records with typed helpers and severity-specific defaults.
//!
//! The two are independent; both assume the single-threaded, run-to-
//! completion execution model of a UI event loop. Neither runs timers or
//! background work: toast expiry and rendering belong to the consuming
//! view layer.
//!
//! [`Persisted<T>`]: persisted::Persisted

#![doc(html_root_url = "https://docs.rs/statekit/0.1.0")]

pub mod error;
pub mod paths;
pub mod persisted;
pub mod storage;
pub mod toasts;

pub use error::{Error, Result};
pub use persisted::{LoadWarning, Persisted};
pub use storage::{FileStore, MemoryStore, Store, StoreHandle};
pub use toasts::{Severity, Toast, ToastId, ToastOptions, ToastRegistry};
