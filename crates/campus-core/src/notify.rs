//! Notifications from the engine to the presentation layer.
//!
//! The engine never draws anything. It queues toast messages and "rebuild"
//! requests into an [`Outbox`]; the caller drains it once per frame and
//! shows toasts / refreshes the open popup.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// Short message for the toast stack.
    Toast(String),
    /// State changed; refresh whatever popup or HUD panel is open.
    Rebuild,
}

/// Pending notifications, in the order they were raised.
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    queue: Vec<Notification>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toast(&mut self, message: impl Into<String>) {
        self.queue.push(Notification::Toast(message.into()));
    }

    /// Request a refresh. Back-to-back requests collapse into one.
    pub fn rebuild(&mut self) {
        if self.queue.last() != Some(&Notification::Rebuild) {
            self.queue.push(Notification::Rebuild);
        }
    }

    /// Take everything queued so far.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.queue)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Queued toast texts, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().filter_map(|n| match n {
            Notification::Toast(text) => Some(text.as_str()),
            Notification::Rebuild => None,
        })
    }
}
