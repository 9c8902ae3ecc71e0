//! Toast-style notifications.
//!
//! Every state-changing action on a screen produces one of these. Handlers
//! return it inline, and the owning session queues a copy so that events
//! which complete later (analysis) still reach the client.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Upper bound on undelivered toasts per session. Oldest are dropped first.
const MAX_QUEUED: usize = 32;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    pub fn logged_out() -> Self {
        Self::info("Logged out successfully", "See you next time!")
    }
}

/// Per-session queue of toasts waiting to be shown.
#[derive(Debug, Default)]
pub struct Inbox {
    queue: VecDeque<Notification>,
}

impl Inbox {
    pub fn push(&mut self, notification: Notification) {
        if self.queue.len() == MAX_QUEUED {
            self.queue.pop_front();
        }
        self.queue.push_back(notification);
    }

    /// Removes and returns everything queued, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
