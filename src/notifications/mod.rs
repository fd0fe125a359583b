//! Notifications module.
//!
//! Transient user feedback emitted by the exchange flow ("processing",
//! success, failure). Core code emits through the sink trait; the
//! presentation layer renders whatever arrives. [`NotificationCenter`]
//! additionally models the banner lifecycle (visible, fading, gone) for
//! front ends that want it managed here.

mod notification_model;
mod notification_service;
mod sink;

pub use notification_model::{Notification, NotificationKind};
pub use notification_service::{ActiveNotification, NotificationCenter, NotificationPhase};
pub use sink::{MockNotificationSink, NoOpNotificationSink, NotificationSink};
