//! Notification module for wordtab
//!
//! Transient messages for file operations and configuration problems.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationState, NotificationType};
