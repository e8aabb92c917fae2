#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: Option<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message,
        }
    }

    pub fn failure(title: impl Into<String>, message: Option<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: title.into(),
            message,
        }
    }
}

/// Toast-style notifications. Fire-and-forget.
pub trait NotifierPort: Send + Sync {
    fn notify(&self, notification: &Notification);
}
