use crm_core::{Notification, Notifier};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: &'static str,
    shown_at: Instant,
}

/// Notification sink that shows the latest message in the status bar for a
/// fixed time. A new message replaces the one on screen.
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    current: Option<Toast>,
    duration: Duration,
}

impl ToastNotifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// The toast to draw this frame, if it has not expired.
    pub fn active(&self) -> Option<&Toast> {
        self.current
            .as_ref()
            .filter(|t| t.shown_at.elapsed() < self.duration)
    }

    /// Drop the current toast once its time is up.
    pub fn expire(&mut self) {
        if self.current.is_some() && self.active().is_none() {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Notifier for ToastNotifier {
    fn notify(&mut self, notification: Notification) {
        debug!(message = notification.message(), "Showing toast");
        self.current = Some(Toast {
            message: notification.message(),
            shown_at: Instant::now(),
        });
    }
}
