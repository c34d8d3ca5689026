use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

/// Single-slot transient notification; a new toast replaces the visible one.
#[derive(Debug, Clone)]
pub struct Toasts {
    duration: Duration,
    current: Option<Toast>,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Toast {
            message: message.into(),
            expires_at: now + self.duration,
        });
    }

    /// Visible toast at `now`; expired toasts are dropped.
    pub fn current(&mut self, now: Instant) -> Option<&Toast> {
        if self.current.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.current = None;
        }
        self.current.as_ref()
    }
}
