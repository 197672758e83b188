//! Feedback seam between the cart and the notification widget.

use serde::{Deserialize, Serialize};

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    /// Alert class used by the markup, e.g. `alert-danger` for errors.
    pub fn alert_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "alert-success",
            NotificationKind::Error => "alert-danger",
            NotificationKind::Warning => "alert-warning",
            NotificationKind::Info => "alert-info",
        }
    }
}

/// Something that can show a transient message to the shopper.
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotificationKind);
}

/// Discards every notification.
impl Notifier for () {
    fn notify(&self, _message: &str, _kind: NotificationKind) {}
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str, kind: NotificationKind) {
        (**self).notify(message, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_classes() {
        assert_eq!(NotificationKind::Success.alert_class(), "alert-success");
        assert_eq!(NotificationKind::Error.alert_class(), "alert-danger");
        assert_eq!(NotificationKind::Warning.alert_class(), "alert-warning");
        assert_eq!(NotificationKind::Info.alert_class(), "alert-info");
    }
}
