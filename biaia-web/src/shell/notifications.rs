//! Notification scope - toasts queued for the next render.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use html_escape::encode_text;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pending notifications kept before the oldest ones are dropped.
pub const DEFAULT_NOTIFICATION_CAPACITY: usize = 20;

/// Severity of a notification, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "toast-success",
            NotificationKind::Error => "toast-error",
            NotificationKind::Warning => "toast-warning",
            NotificationKind::Info => "toast-info",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✗",
            NotificationKind::Warning => "!",
            NotificationKind::Info => "i",
        }
    }
}

/// One user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Renders the notification as a dismissible toast. Title and message are
    /// escaped as text.
    pub fn render_toast(&self) -> String {
        let message_html = self
            .message
            .as_deref()
            .map(|m| format!(r#"<p class="toast-message">{}</p>"#, encode_text(m)))
            .unwrap_or_default();

        format!(
            r#"<div class="toast {kind_class}" role="status" data-notification-id="{id}">
            <span class="toast-icon">{icon}</span>
            <div class="toast-body"><p class="toast-title">{title}</p>{message_html}</div>
            <button class="toast-dismiss" onclick="this.parentElement.remove()">×</button>
        </div>"#,
            kind_class = self.kind.css_class(),
            id = self.id,
            icon = self.kind.icon(),
            title = encode_text(&self.title),
        )
    }
}

/// Capability letting any code queue notifications for the visitor.
pub trait NotificationScope: Send + Sync + fmt::Debug {
    /// Queues a notification and returns its id.
    fn notify(&self, notification: Notification) -> Uuid;

    /// Removes a queued notification. Returns whether it was still pending.
    fn dismiss(&self, id: Uuid) -> bool;

    /// Snapshot of the queued notifications, oldest first.
    fn pending(&self) -> Vec<Notification>;

    /// Wraps `children` in the notification scope, rendering and draining
    /// every queued notification.
    fn wrap(&self, children: &str) -> String;
}

/// In-memory notification queue shared by every render.
#[derive(Debug)]
pub struct NotificationCenter {
    pending: Mutex<VecDeque<Notification>>,
    capacity: usize,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_NOTIFICATION_CAPACITY)
    }

    /// Keeps at most `capacity` notifications, dropping the oldest first.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationScope for NotificationCenter {
    fn notify(&self, notification: Notification) -> Uuid {
        let id = notification.id;
        let mut pending = self.pending.lock();
        if pending.len() == self.capacity {
            pending.pop_front();
        }
        pending.push_back(notification);
        id
    }

    fn dismiss(&self, id: Uuid) -> bool {
        let mut pending = self.pending.lock();
        let before = pending.len();
        pending.retain(|n| n.id != id);
        pending.len() != before
    }

    fn pending(&self) -> Vec<Notification> {
        self.pending.lock().iter().cloned().collect()
    }

    fn wrap(&self, children: &str) -> String {
        let toasts: String = self
            .pending
            .lock()
            .drain(..)
            .map(|n| n.render_toast())
            .collect();

        format!(
            r#"<div data-scope="notifications"><div class="toast-region" aria-live="polite">{toasts}</div>{children}</div>"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_and_dismiss() {
        let center = NotificationCenter::new();
        let first = center.notify(Notification::new(NotificationKind::Info, "Welcome"));
        let second = center.notify(Notification::new(NotificationKind::Success, "Saved"));

        assert_eq!(center.pending().len(), 2);
        assert!(center.dismiss(first));
        assert!(!center.dismiss(first));
        assert_eq!(center.pending()[0].id, second);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let center = NotificationCenter::with_capacity(2);
        center.notify(Notification::new(NotificationKind::Info, "one"));
        center.notify(Notification::new(NotificationKind::Info, "two"));
        center.notify(Notification::new(NotificationKind::Info, "three"));

        let titles: Vec<String> = center.pending().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, ["two", "three"]);
    }

    #[test]
    fn test_toast_escapes_title_and_message() {
        let toast = Notification::new(NotificationKind::Error, "<script>alert(1)</script>")
            .with_message("<img src=x onerror=alert(2)>")
            .render_toast();

        assert!(!toast.contains("<script>"));
        assert!(!toast.contains("<img"));
        assert!(toast.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(toast.contains("&lt;img src=x onerror=alert(2)&gt;"));
    }

    #[test]
    fn test_wrap_renders_then_drains() {
        let center = NotificationCenter::new();
        center.notify(
            Notification::new(NotificationKind::Warning, "Appointment moved")
                .with_message("Your checkup is now on Friday"),
        );

        let html = center.wrap("<main></main>");
        assert!(html.contains("toast-warning"));
        assert!(html.contains("Appointment moved"));
        assert!(html.contains("Your checkup is now on Friday"));
        assert!(html.ends_with("<main></main></div>"));

        assert!(center.pending().is_empty());
        assert!(!center.wrap("").contains("toast-warning"));
    }
}
