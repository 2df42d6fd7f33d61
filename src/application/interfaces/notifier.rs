use crate::domain::Notification;

/// Presents transient user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
