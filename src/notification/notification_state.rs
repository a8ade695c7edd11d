//! Notification state management

use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::theme;

/// Notification type - determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Short-lived confirmation such as "Saved notes.txt"
    #[default]
    Info,
    /// Longer-lived, e.g. an invalid config file
    Warning,
    /// Stays until dismissed, e.g. a failed save
    Error,
}

impl NotificationType {
    fn duration(self) -> Option<Duration> {
        match self {
            NotificationType::Info => Some(Duration::from_millis(2000)),
            NotificationType::Warning => Some(Duration::from_secs(10)),
            NotificationType::Error => None,
        }
    }

    fn style(self) -> NotificationStyle {
        let colors = match self {
            NotificationType::Info => &theme::notification::INFO,
            NotificationType::Warning => &theme::notification::WARNING,
            NotificationType::Error => &theme::notification::ERROR,
        };
        NotificationStyle {
            fg: colors.fg,
            bg: colors.bg,
            border: colors.border,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub style: NotificationStyle,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Option<Duration>, // None = permanent
}

impl Notification {
    pub fn with_type(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            style: notification_type.style(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        match self.duration {
            Some(d) => self.created_at.elapsed() > d,
            None => false,
        }
    }
}

/// Holds at most one visible notification; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Info);
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Warning);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Error);
    }

    pub fn show_with_type(&mut self, message: &str, notification_type: NotificationType) {
        #[cfg(debug_assertions)]
        log::debug!("notification ({:?}): {}", notification_type, message);

        self.current = Some(Notification::with_type(message, notification_type));
    }

    /// Dismiss the current notification. Returns true if one was visible.
    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref notif) = self.current
            && notif.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::thread;

    #[test]
    fn test_info_notification() {
        let notif = Notification::with_type("Saved", NotificationType::Info);
        assert_eq!(notif.message, "Saved");
        assert_eq!(notif.duration, Some(Duration::from_millis(2000)));
        assert_eq!(notif.style.bg, theme::notification::INFO.bg);
        assert!(!notif.is_expired());
    }

    #[test]
    fn test_warning_notification() {
        let notif = Notification::with_type("Warning!", NotificationType::Warning);
        assert_eq!(notif.duration, Some(Duration::from_secs(10)));
        assert_eq!(notif.style.fg, theme::notification::WARNING.fg);
    }

    #[test]
    fn test_error_notification_is_permanent() {
        let mut state = NotificationState::new();
        state.show_error("Failed to write /root/x");

        let notif = state.current().unwrap();
        assert_eq!(notif.notification_type, NotificationType::Error);
        assert_eq!(notif.duration, None);
        assert!(!state.clear_if_expired());
        assert!(state.current().is_some());
    }

    #[test]
    fn test_notification_expiration() {
        let mut state = NotificationState::new();
        state.show("Short");
        if let Some(ref mut notif) = state.current {
            notif.duration = Some(Duration::from_millis(10));
        }

        assert!(!state.clear_if_expired());
        thread::sleep(Duration::from_millis(20));
        assert!(state.clear_if_expired());
        assert!(state.current().is_none());
    }

    #[test]
    fn test_dismiss() {
        let mut state = NotificationState::new();
        assert!(!state.dismiss());

        state.show_error("boom");
        assert!(state.dismiss());
        assert!(state.current().is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Only the most recent notification is visible
        #[test]
        fn prop_notification_replacement(messages in prop::collection::vec("[a-zA-Z0-9 ]{1,50}", 1..10)) {
            let mut state = NotificationState::new();
            for msg in &messages {
                state.show(msg);
            }

            let last_message = messages.last().unwrap();
            prop_assert_eq!(state.current_message(), Some(last_message.as_str()));
        }
    }
}
