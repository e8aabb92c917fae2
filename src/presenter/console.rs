use std::io::{self, Write};

use tf_core::ports::{Notification, NotificationKind, NotifierPort};
use tracing::{info, warn};

/// Prints notifications to stderr, clearing the status line first when
/// stderr is a terminal.
pub struct ConsoleNotifier {
    interactive: bool,
}

impl ConsoleNotifier {
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }
}

pub fn format_notification(notification: &Notification) -> String {
    let icon = match notification.kind {
        NotificationKind::Success => "✔",
        NotificationKind::Failure => "✖",
    };
    match &notification.message {
        Some(message) => format!("{icon} {}\n  {message}", notification.title),
        None => format!("{icon} {}", notification.title),
    }
}

impl NotifierPort for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.kind {
            NotificationKind::Success => info!(title = %notification.title, "Notification"),
            NotificationKind::Failure => warn!(
                title = %notification.title,
                message = notification.message.as_deref().unwrap_or_default(),
                "Notification"
            ),
        }

        let mut stderr = io::stderr().lock();
        if self.interactive {
            let _ = write!(stderr, "\r\x1b[2K");
        }
        let _ = writeln!(stderr, "{}", format_notification(notification));
    }
}
