// SPDX-License-Identifier: MPL-2.0
//! Toast notification records for user feedback.
//!
//! This module provides the state half of a toast/snackbar system:
//! notifications appear temporarily to inform users about actions (save
//! success, errors, etc.) without blocking interaction. Rendering is left
//! entirely to the consuming view layer, which reads the registry's list
//! and dismisses toasts on its own schedule.
//!
//! # Components
//!
//! - [`toast`] - core `Toast` record with `Severity` and `ToastOptions`
//! - [`registry`] - `ToastRegistry` owning the display list and id counter
//!
//! # Usage
//!
//! ```
//! use statekit::{ToastOptions, ToastRegistry};
//!
//! let mut toasts = ToastRegistry::new();
//!
//! // Push a notification and keep its id for manual dismissal.
//! let id = toasts.success("Image saved", "photo.png", ToastOptions::new());
//!
//! // The view layer reads the list in display order.
//! assert_eq!(toasts.toasts().len(), 1);
//!
//! toasts.remove(id);
//! assert!(toasts.is_empty());
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 3s default, 5s for the `error` helper, all overridable
//! - Display order = insertion order; the registry imposes no visible cap
//! - Expiry is consumer-driven: `prune_expired` sweeps, nothing is timed
//!   internally

mod registry;
mod toast;

pub use registry::ToastRegistry;
pub use toast::{Severity, Toast, ToastId, ToastOptions, DEFAULT_DURATION, ERROR_DURATION};
