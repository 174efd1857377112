use std::fmt;

/// A successful mutation the user should hear about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    Added,
    Updated,
    Deleted,
}

impl Notification {
    pub fn message(self) -> &'static str {
        match self {
            Notification::Added => "Клиент успешно добавлен",
            Notification::Updated => "Клиент успешно обновлен",
            Notification::Deleted => "Клиент удален",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Fire-and-forget sink for success messages.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _notification: Notification) {}
}

/// Keeps every notification in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> &[Notification] {
        &self.received
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.received.push(notification);
    }
}
