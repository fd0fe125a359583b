use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::notification_model::Notification;
use super::sink::NotificationSink;
use crate::constants::{DEFAULT_NOTIFICATION_FADE_MS, DEFAULT_NOTIFICATION_VISIBLE_MS};

/// Display phase of an on-screen notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPhase {
    Visible,
    Fading,
}

/// A notification currently on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveNotification {
    pub notification: Notification,
    pub phase: NotificationPhase,
}

/// In-memory registry of on-screen notifications.
///
/// Models the banner lifecycle: a notification stays `Visible` for the
/// configured duration, turns `Fading` for the fade duration, then is
/// removed. `dismiss` short-cuts straight to the fade phase. The
/// presentation layer only ever reads `active()` snapshots.
#[derive(Clone)]
pub struct NotificationCenter {
    active: Arc<Mutex<Vec<ActiveNotification>>>,
    visible_for: Duration,
    fade_for: Duration,
}

impl NotificationCenter {
    pub fn new(visible_for: Duration, fade_for: Duration) -> Self {
        Self {
            active: Arc::new(Mutex::new(Vec::new())),
            visible_for,
            fade_for,
        }
    }

    fn lock(active: &Mutex<Vec<ActiveNotification>>) -> MutexGuard<'_, Vec<ActiveNotification>> {
        active.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registers a notification and schedules its auto-dismiss.
    pub fn push(&self, notification: Notification) -> Uuid {
        let id = notification.id;
        debug!("showing notification {id}");
        Self::lock(&self.active).push(ActiveNotification {
            notification,
            phase: NotificationPhase::Visible,
        });

        let active = Arc::clone(&self.active);
        let visible_for = self.visible_for;
        let fade_for = self.fade_for;
        tokio::spawn(async move {
            tokio::time::sleep(visible_for).await;
            if !begin_fade(&active, id) {
                // Already fading (or gone) through a manual dismiss.
                return;
            }
            tokio::time::sleep(fade_for).await;
            remove(&active, id);
        });

        id
    }

    /// Starts fading `id` out immediately, as when the user closes the
    /// banner by hand. The scheduled auto-dismiss then has nothing to do.
    pub fn dismiss(&self, id: Uuid) {
        if !begin_fade(&self.active, id) {
            return;
        }

        let active = Arc::clone(&self.active);
        let fade_for = self.fade_for;
        tokio::spawn(async move {
            tokio::time::sleep(fade_for).await;
            remove(&active, id);
        });
    }

    /// Snapshot of the notifications currently on screen.
    pub fn active(&self) -> Vec<ActiveNotification> {
        Self::lock(&self.active).clone()
    }

    pub fn is_empty(&self) -> bool {
        Self::lock(&self.active).is_empty()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_NOTIFICATION_VISIBLE_MS),
            Duration::from_millis(DEFAULT_NOTIFICATION_FADE_MS),
        )
    }
}

impl NotificationSink for NotificationCenter {
    fn notify(&self, notification: Notification) {
        self.push(notification);
    }
}

/// Flips `id` to `Fading` if it is still visible. Returns whether the
/// caller now owns the removal step.
fn begin_fade(active: &Mutex<Vec<ActiveNotification>>, id: Uuid) -> bool {
    let mut guard = NotificationCenter::lock(active);
    match guard
        .iter_mut()
        .find(|entry| entry.notification.id == id && entry.phase == NotificationPhase::Visible)
    {
        Some(entry) => {
            entry.phase = NotificationPhase::Fading;
            true
        }
        None => false,
    }
}

fn remove(active: &Mutex<Vec<ActiveNotification>>, id: Uuid) {
    NotificationCenter::lock(active).retain(|entry| entry.notification.id != id);
}
