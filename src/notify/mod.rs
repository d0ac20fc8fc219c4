//! Toast notification service.
//!
//! The submission flow reports outcomes through the [`Notifier`] interface
//! rather than a process-wide queue, so embedders can route toasts wherever
//! their UI shows them. [`NotificationQueue`] is the default implementation: a
//! shared FIFO that tolerates concurrent enqueue from multiple form instances.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How long a submission toast stays on screen.
pub const TOAST_TIMEOUT: Duration = Duration::from_millis(2000);

/// A transient, time-limited UI message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub timeout: Duration,
}

impl Notification {
    /// Toast for a successfully created article or draft.
    pub fn created(publish: bool) -> Self {
        Self {
            title: format!("Successfully created {}.", kind(publish)),
            timeout: TOAST_TIMEOUT,
        }
    }

    /// Toast for a failed submission attempt.
    pub fn failed(publish: bool) -> Self {
        Self {
            title: format!("Failed to create {}.", kind(publish)),
            timeout: TOAST_TIMEOUT,
        }
    }
}

fn kind(publish: bool) -> &'static str {
    if publish {
        "article"
    } else {
        "draft"
    }
}

/// Notification sink injected into the submission flow.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Shared FIFO of pending toasts.
///
/// Clones share the same queue. Enqueueing never blocks the UI beyond the
/// mutex; display scheduling is the consumer's concern.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    inner: Arc<Mutex<VecDeque<Notification>>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the oldest pending notification.
    pub fn pop(&self) -> Option<Notification> {
        self.inner.lock().expect("notification queue poisoned").pop_front()
    }

    /// Drain all pending notifications in arrival order.
    pub fn drain(&self) -> Vec<Notification> {
        self.inner
            .lock()
            .expect("notification queue poisoned")
            .drain(..)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("notification queue poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, notification: Notification) {
        tracing::debug!(title = %notification.title, "Enqueueing toast");
        self.inner
            .lock()
            .expect("notification queue poisoned")
            .push_back(notification);
    }
}
