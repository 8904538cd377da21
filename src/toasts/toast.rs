// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record, the `Severity` enum, and the
//! `ToastOptions` struct used to override per-toast defaults.

use std::time::{Duration, Instant};

/// Display duration applied when neither the caller nor a severity helper
/// sets one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Display duration applied by the [`error`](crate::ToastRegistry::error)
/// helper when the caller does not set one.
pub const ERROR_DURATION: Duration = Duration::from_millis(5000);

/// Unique identifier for a toast within its registry.
///
/// Ids are issued in strictly increasing order starting at 1 and are never
/// reused for the registry's lifetime, so a stale id held by a dismiss
/// timer can never remove the wrong toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub(super) u64);

/// Severity level determines visual styling and the default display
/// duration of the typed helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (3s default duration).
    #[default]
    Info,
    /// Operation completed successfully (3s default duration).
    Success,
    /// Warning that doesn't block operation (3s default duration).
    Warning,
    /// Error requiring attention (5s default duration).
    Error,
}

impl Severity {
    /// Returns the display duration the typed helpers fall back to.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        match self {
            Severity::Info | Severity::Success | Severity::Warning => DEFAULT_DURATION,
            Severity::Error => ERROR_DURATION,
        }
    }
}

/// Per-toast overrides with explicit precedence.
///
/// Every field is optional; unset fields fall back first to the typed
/// helper's severity defaults, then to the base defaults (`Info`, 3s,
/// auto-hide on, empty title and message). A field the caller sets always
/// wins, including [`severity`](Self::with_severity) passed to a typed
/// helper.
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    pub severity: Option<Severity>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub duration: Option<Duration>,
    pub auto_hide: Option<bool>,
}

impl ToastOptions {
    /// Creates options with nothing overridden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Overrides the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overrides the message body.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Overrides the display duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Overrides whether the toast is eligible for timer-driven dismissal.
    #[must_use]
    pub fn with_auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = Some(auto_hide);
        self
    }

    /// Fills unset `severity`/`title`/`message` fields, leaving caller
    /// values untouched. Used by the typed registry helpers.
    pub(super) fn or_typed(mut self, severity: Severity, title: String, message: String) -> Self {
        self.severity.get_or_insert(severity);
        self.title.get_or_insert(title);
        self.message.get_or_insert(message);
        self
    }
}

/// A notification record queued for display by an external view layer.
///
/// `duration` and `auto_hide` are advisory: the registry never runs timers.
/// A rendering consumer is expected to dismiss toasts itself, either through
/// its own timers or by calling
/// [`prune_expired`](crate::ToastRegistry::prune_expired) periodically.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    severity: Severity,
    title: String,
    message: String,
    duration: Duration,
    auto_hide: bool,
    created_at: Instant,
}

impl Toast {
    /// Builds a toast from caller options, applying the base defaults to
    /// any unset field.
    ///
    /// Note the base display duration is always 3s here; the 5s error
    /// duration belongs to the [`error`](crate::ToastRegistry::error)
    /// helper, not to the `Error` severity itself.
    pub(super) fn from_options(id: ToastId, options: ToastOptions) -> Self {
        Self {
            id,
            severity: options.severity.unwrap_or_default(),
            title: options.title.unwrap_or_default(),
            message: options.message.unwrap_or_default(),
            duration: options.duration.unwrap_or(DEFAULT_DURATION),
            auto_hide: options.auto_hide.unwrap_or(true),
            created_at: Instant::now(),
        }
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the title line.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the message body. May be empty.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the advisory display duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether the toast is eligible for timer-driven dismissal.
    #[must_use]
    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    /// Returns when this toast was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this toast.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns whether a timer-driven consumer should dismiss this toast:
    /// auto-hide is on and the display duration has elapsed.
    #[must_use]
    pub fn should_auto_hide(&self) -> bool {
        self.auto_hide && self.age() >= self.duration
    }
}
