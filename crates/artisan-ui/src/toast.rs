//! Transient on-screen notifications.

use artisan_commerce::notify::NotificationKind;

/// One notification on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: u64,
}

impl Toast {
    /// Full class list for the alert element.
    pub fn class(&self) -> String {
        format!(
            "alert {} alert-dismissible fade show position-fixed",
            self.kind.alert_class()
        )
    }
}

/// Toasts currently shown, oldest first.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    duration_ms: u64,
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            next_id: 1,
            toasts: Vec::new(),
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Show a message; it expires `duration_ms` after `now`.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now: u64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            expires_at: now.saturating_add(self.duration_ms),
        });
        id
    }

    /// Close button. Returns whether the toast was still shown.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() < before
    }

    /// Drop every toast whose time is up. Returns how many were dropped.
    pub fn expire(&mut self, now: u64) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        before - self.toasts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_expire() {
        let mut queue = ToastQueue::new(3000);
        queue.push("first", NotificationKind::Success, 0);
        queue.push("second", NotificationKind::Error, 1000);

        assert_eq!(queue.expire(2999), 0);
        assert_eq!(queue.expire(3000), 1);
        assert_eq!(queue.iter().next().unwrap().message, "second");
        assert_eq!(queue.expire(4000), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dismiss_early() {
        let mut queue = ToastQueue::new(3000);
        let id = queue.push("bye", NotificationKind::Info, 0);
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert_eq!(queue.expire(10_000), 0);
    }

    #[test]
    fn test_ids_increase() {
        let mut queue = ToastQueue::new(3000);
        let a = queue.push("a", NotificationKind::Info, 0);
        let b = queue.push("b", NotificationKind::Info, 0);
        assert!(b > a);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_class() {
        let mut queue = ToastQueue::new(3000);
        queue.push("oops", NotificationKind::Error, 0);
        let toast = queue.iter().next().unwrap();
        assert!(toast.class().contains("alert-danger"));
        assert!(toast.class().starts_with("alert "));
    }
}
