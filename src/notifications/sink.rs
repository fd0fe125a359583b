use std::sync::{Arc, Mutex};

use super::notification_model::{Notification, NotificationKind};

/// Receives notifications emitted by the exchange flow.
///
/// The presentation layer implements this to render transient banners.
/// `notify` must be fast and non-blocking, and a sink that drops
/// messages must not affect the exchange itself: delivery is
/// best-effort.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Discards every notification.
#[derive(Clone, Default)]
pub struct NoOpNotificationSink;

impl NotificationSink for NoOpNotificationSink {
    fn notify(&self, _notification: Notification) {}
}

/// Test sink that collects notifications in memory.
#[derive(Clone, Default)]
pub struct MockNotificationSink {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl MockNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far, in arrival order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    /// Messages of the given kind, in arrival order.
    pub fn messages_of(&self, kind: NotificationKind) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.lock().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.notifications.lock().unwrap().clear();
    }
}

impl NotificationSink for MockNotificationSink {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}
