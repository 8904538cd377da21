// SPDX-License-Identifier: MPL-2.0
//! Toast list lifecycle management.
//!
//! The `ToastRegistry` owns the ordered display list and the id counter.
//! It is an explicit, injectable container rather than process-global
//! state, so an application holds exactly one (or tests hold many,
//! isolated).

use super::toast::{Severity, Toast, ToastId, ToastOptions, ERROR_DURATION};

/// Owns the ordered toast list and issues ids.
///
/// Insertion order is display order. The registry never runs timers;
/// `duration`/`auto_hide` are advisory for the rendering consumer, which
/// dismisses toasts through [`remove`](Self::remove) or sweeps expired
/// ones with [`prune_expired`](Self::prune_expired).
#[derive(Debug, Default)]
pub struct ToastRegistry {
    toasts: Vec<Toast>,
    last_id: u64,
}

impl ToastRegistry {
    /// Creates an empty registry. The first issued id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast built from `options` and returns its id.
    ///
    /// Unset option fields fall back to the base defaults: `Info`
    /// severity, 3s duration, auto-hide on, empty title and message. The
    /// 5s error duration is applied only by the [`error`](Self::error)
    /// helper, never here.
    pub fn add(&mut self, options: ToastOptions) -> ToastId {
        self.last_id += 1;
        let id = ToastId(self.last_id);
        self.toasts.push(Toast::from_options(id, options));
        id
    }

    /// Removes the toast with the given id, preserving the order of the
    /// rest.
    ///
    /// Returns `true` if a toast was removed. Removing an absent id is a
    /// no-op, so dismiss timers firing after a manual dismissal are
    /// harmless.
    pub fn remove(&mut self, id: ToastId) -> bool {
        if let Some(pos) = self.toasts.iter().position(|t| t.id() == id) {
            self.toasts.remove(pos);
            true
        } else {
            false
        }
    }

    /// Appends a success toast. Caller options win on every field.
    pub fn success(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.add(options.or_typed(Severity::Success, title.into(), message.into()))
    }

    /// Appends a warning toast. Caller options win on every field.
    pub fn warning(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.add(options.or_typed(Severity::Warning, title.into(), message.into()))
    }

    /// Appends an info toast. Caller options win on every field.
    pub fn info(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.add(options.or_typed(Severity::Info, title.into(), message.into()))
    }

    /// Appends an error toast with a 5s default duration. Caller options
    /// win on every field, including the duration.
    pub fn error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        mut options: ToastOptions,
    ) -> ToastId {
        options.duration.get_or_insert(ERROR_DURATION);
        self.add(options.or_typed(Severity::Error, title.into(), message.into()))
    }

    /// Drops all toasts. Issued ids are not reset.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Removes every toast whose display time has elapsed and returns the
    /// removed ids.
    ///
    /// Intended to be called periodically by a timer-driven consumer
    /// (e.g. every 100-500ms). Toasts with auto-hide off are never swept.
    pub fn prune_expired(&mut self) -> Vec<ToastId> {
        let mut removed = Vec::new();
        self.toasts.retain(|toast| {
            if toast.should_auto_hide() {
                removed.push(toast.id());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Returns the live display list, in insertion order.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Returns the number of queued toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns whether the registry holds no toasts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
