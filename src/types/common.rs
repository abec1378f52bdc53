use serde::{Deserialize, Serialize};

/// Notification severity
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

/// A notice for the operator, rendered by the shell as a dismissable toast
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub text: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Identifies which blocking confirmation surface a shell lifecycle event
/// refers to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ConfirmationSurface {
    WifiChange,
    WifiEnable,
}

/// State of a modal surface with no dismiss affordance.
///
/// The shell animates the surface in when `visible` flips to true and reports
/// `ConfirmationShown` once it is actually on screen; hiding works the same
/// way through `ConfirmationHidden`. The core never acts on a surface before
/// the shell has reported it visible.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockingConfirmation {
    visible: bool,
    caption: String,
}

impl BlockingConfirmation {
    /// Show the surface with the given caption
    pub fn show(&mut self, caption: impl Into<String>) {
        self.visible = true;
        self.caption = caption.into();
    }

    /// Hide the surface, keeping the caption for the hide animation
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Check if the surface is currently requested visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Get the caption
    pub fn caption(&self) -> &str {
        &self.caption
    }
}
